//! Host sessions replayed through the UI thread.

use menu_core::{ControlTree, Node, Symbol};
use menu_driver::{DriverConfig, UiThread};
use menu_model::{HostCall, HostReturn};

const SESSION: &str = r#"[
  { "ReturnID": "1", "Method": "menus.New", "Input": { "ID": "menu-1" } },
  { "ReturnID": "2", "Method": "menus.Load", "Input": { "ID": "menu-1" } },
  {
    "ReturnID": "3",
    "Method": "menus.Render",
    "Input": {
      "ID": "menu-1",
      "Changes": "[{\"Action\":1,\"NodeID\":\"app\",\"Type\":\"App\",\"IsCompo\":true},{\"Action\":1,\"NodeID\":\"root\",\"CompoID\":\"app\",\"Type\":\"menu\"},{\"Action\":6,\"NodeID\":\"app\",\"ChildID\":\"root\"},{\"Action\":1,\"NodeID\":\"paste\",\"CompoID\":\"app\",\"Type\":\"menuitem\"},{\"Action\":3,\"NodeID\":\"paste\",\"Key\":\"label\",\"Value\":\"Paste\"},{\"Action\":3,\"NodeID\":\"paste\",\"Key\":\"role\",\"Value\":\"paste\"},{\"Action\":6,\"NodeID\":\"root\",\"ChildID\":\"paste\"},{\"Action\":0,\"NodeID\":\"root\"}]"
    }
  },
  {
    "ReturnID": "4",
    "Method": "menus.Render",
    "Input": {
      "ID": "menu-1",
      "Changes": [
        { "Action": 3, "NodeID": "paste", "Key": "keys", "Value": "ctrl+shift+v" }
      ]
    }
  },
  { "ReturnID": "5", "Method": "menus.Render", "Input": { "ID": "menu-1", "Changes": "[{\"Action\":9,\"NodeID\":\"x\"}]" } },
  { "ReturnID": "6", "Method": "menus.Render", "Input": { "ID": "menu-2", "Changes": "[]" } }
]"#;

#[test]
fn recorded_session_replays() {
    let calls: Vec<HostCall> = serde_json::from_str(SESSION).unwrap();
    let ui = UiThread::spawn(DriverConfig::default(), ControlTree::new).unwrap();

    let replies: Vec<HostReturn> = calls
        .into_iter()
        .map(|call| ui.call(call).unwrap())
        .collect();

    assert_eq!(
        replies,
        vec![
            HostReturn::ok("1"),
            HostReturn::ok("2"),
            HostReturn::ok("3"),
            HostReturn::ok("4"),
            HostReturn::error("5", "9 change is not supported"),
            HostReturn::error("6", "menu menu-2 not found"),
        ]
    );

    let (outline, is_root_compo, icon) = ui
        .exec(|driver| {
            let menu = driver.menu("menu-1").unwrap();
            let root = menu.root().unwrap().handle;
            let paste = menu.node("paste").and_then(Node::active_handle).unwrap();
            let app = menu.node("app").and_then(Node::as_component).unwrap();
            (
                driver.toolkit().outline(root),
                app.is_root_compo,
                driver.toolkit().icon(paste),
            )
        })
        .unwrap();
    assert_eq!(outline, " >\n  Paste [Paste] (Ctrl+Shift+V)\n");
    assert!(is_root_compo);
    assert_eq!(icon, Some(Symbol::Paste));
}

#[test]
fn replies_serialize_for_the_host() {
    let json = serde_json::to_string(&HostReturn::error("7", "node x not found")).unwrap();
    assert_eq!(json, r#"{"ReturnID":"7","Err":"node x not found"}"#);
    let json = serde_json::to_string(&HostReturn::ok("8")).unwrap();
    assert_eq!(json, r#"{"ReturnID":"8","Err":null}"#);
}

#[test]
fn dropping_the_thread_releases_menus() {
    let ui = UiThread::spawn(DriverConfig::default(), ControlTree::new).unwrap();
    let reply = ui
        .call(HostCall::new(
            "1",
            "menus.New",
            serde_json::json!({ "ID": "m" }),
        ))
        .unwrap();
    assert!(reply.is_ok());
    drop(ui);
}
