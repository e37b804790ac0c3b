//! Tree mutations as sent by the host.
//!
//! The host serialises each mutation as a flat record whose `Action` field is
//! a numeric tag. [`Change`] mirrors that record; [`Change::to_mutation`]
//! validates it into the typed [`Mutation`] the reconciler consumes.

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

/// Numeric mutation tags. The values are fixed by the host protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum ChangeAction {
    SetRoot = 0,
    NewNode = 1,
    DelNode = 2,
    SetAttr = 3,
    DelAttr = 4,
    AppendChild = 6,
}

impl ChangeAction {
    pub fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            0 => Some(Self::SetRoot),
            1 => Some(Self::NewNode),
            2 => Some(Self::DelNode),
            3 => Some(Self::SetAttr),
            4 => Some(Self::DelAttr),
            6 => Some(Self::AppendChild),
            _ => None,
        }
    }

    pub fn tag(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SetRoot => "SetRoot",
            Self::NewNode => "NewNode",
            Self::DelNode => "DelNode",
            Self::SetAttr => "SetAttr",
            Self::DelAttr => "DelAttr",
            Self::AppendChild => "AppendChild",
        }
    }
}

/// One mutation record in wire form.
///
/// Every field except `Action` is optional on the wire; which ones are
/// required depends on the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "Action")]
    pub action: i64,
    #[serde(rename = "NodeID", default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(rename = "CompoID", default, skip_serializing_if = "Option::is_none")]
    pub compo_id: Option<String>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(rename = "IsCompo", default, skip_serializing_if = "Option::is_none")]
    pub is_compo: Option<bool>,
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "ChildID", default, skip_serializing_if = "Option::is_none")]
    pub child_id: Option<String>,
}

/// A validated mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetRoot {
        node_id: String,
    },
    NewNode {
        node_id: String,
        compo_id: String,
        node_type: String,
        is_compo: bool,
    },
    DelNode {
        node_id: String,
    },
    SetAttr {
        node_id: String,
        key: String,
        value: String,
    },
    DelAttr {
        node_id: String,
        key: String,
    },
    AppendChild {
        node_id: String,
        child_id: String,
    },
}

impl Mutation {
    pub fn action(&self) -> ChangeAction {
        match self {
            Self::SetRoot { .. } => ChangeAction::SetRoot,
            Self::NewNode { .. } => ChangeAction::NewNode,
            Self::DelNode { .. } => ChangeAction::DelNode,
            Self::SetAttr { .. } => ChangeAction::SetAttr,
            Self::DelAttr { .. } => ChangeAction::DelAttr,
            Self::AppendChild { .. } => ChangeAction::AppendChild,
        }
    }

    /// The node the mutation targets.
    pub fn node_id(&self) -> &str {
        match self {
            Self::SetRoot { node_id }
            | Self::NewNode { node_id, .. }
            | Self::DelNode { node_id }
            | Self::SetAttr { node_id, .. }
            | Self::DelAttr { node_id, .. }
            | Self::AppendChild { node_id, .. } => node_id,
        }
    }
}

impl Change {
    /// Validate the record against its action.
    ///
    /// Defaults: `CompoID` and `Value` fall back to the empty string,
    /// `IsCompo` to `false`. A component's `Type` is its component name and
    /// may be absent.
    pub fn to_mutation(&self) -> Result<Mutation> {
        let action =
            ChangeAction::from_tag(self.action).ok_or(ModelError::UnsupportedChange(self.action))?;
        let node_id = required(action, "NodeID", self.node_id.as_deref())?;

        let mutation = match action {
            ChangeAction::SetRoot => Mutation::SetRoot { node_id },
            ChangeAction::NewNode => {
                let is_compo = self.is_compo.unwrap_or(false);
                let node_type = if is_compo {
                    self.node_type.clone().unwrap_or_default()
                } else {
                    required(action, "Type", self.node_type.as_deref())?
                };
                Mutation::NewNode {
                    node_id,
                    compo_id: self.compo_id.clone().unwrap_or_default(),
                    node_type,
                    is_compo,
                }
            }
            ChangeAction::DelNode => Mutation::DelNode { node_id },
            ChangeAction::SetAttr => Mutation::SetAttr {
                node_id,
                key: required(action, "Key", self.key.as_deref())?,
                value: self.value.clone().unwrap_or_default(),
            },
            ChangeAction::DelAttr => Mutation::DelAttr {
                node_id,
                key: required(action, "Key", self.key.as_deref())?,
            },
            ChangeAction::AppendChild => Mutation::AppendChild {
                node_id,
                child_id: required(action, "ChildID", self.child_id.as_deref())?,
            },
        };
        Ok(mutation)
    }

    pub fn set_root(node_id: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::SetRoot.tag(),
            node_id: Some(node_id.into()),
            ..Self::default()
        }
    }

    /// A `NewNode` record for a native node of the given type.
    pub fn new_node(node_id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::NewNode.tag(),
            node_id: Some(node_id.into()),
            node_type: Some(node_type.into()),
            ..Self::default()
        }
    }

    /// A `NewNode` record for a component placeholder.
    pub fn new_compo(node_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::NewNode.tag(),
            node_id: Some(node_id.into()),
            node_type: Some(name.into()),
            is_compo: Some(true),
            ..Self::default()
        }
    }

    pub fn del_node(node_id: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::DelNode.tag(),
            node_id: Some(node_id.into()),
            ..Self::default()
        }
    }

    pub fn set_attr(
        node_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            action: ChangeAction::SetAttr.tag(),
            node_id: Some(node_id.into()),
            key: Some(key.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn del_attr(node_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::DelAttr.tag(),
            node_id: Some(node_id.into()),
            key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn append_child(node_id: impl Into<String>, child_id: impl Into<String>) -> Self {
        Self {
            action: ChangeAction::AppendChild.tag(),
            node_id: Some(node_id.into()),
            child_id: Some(child_id.into()),
            ..Self::default()
        }
    }

    /// Set the owning component id.
    #[must_use]
    pub fn with_compo_id(mut self, compo_id: impl Into<String>) -> Self {
        self.compo_id = Some(compo_id.into());
        self
    }
}

fn required(action: ChangeAction, field: &'static str, value: Option<&str>) -> Result<String> {
    value.map(str::to_string).ok_or(ModelError::MissingField {
        action: action.name(),
        field,
    })
}

/// Decode a JSON array of change records.
pub fn parse_changes(json: &str) -> Result<Vec<Change>> {
    serde_json::from_str(json).map_err(ModelError::InvalidChanges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for tag in [0, 1, 2, 3, 4, 6] {
            let action = ChangeAction::from_tag(tag).expect("known tag");
            assert_eq!(action.tag(), tag);
        }
        assert_eq!(ChangeAction::from_tag(5), None);
        assert_eq!(ChangeAction::from_tag(-1), None);
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        let change = Change {
            action: 5,
            node_id: Some("n1".into()),
            ..Change::default()
        };
        let err = change.to_mutation().unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedChange(5)));
        assert_eq!(err.to_string(), "5 change is not supported");
    }

    #[test]
    fn optional_fields_default() {
        let change = Change {
            action: 1,
            node_id: Some("n1".into()),
            node_type: Some("menu".into()),
            ..Change::default()
        };
        assert_eq!(
            change.to_mutation().unwrap(),
            Mutation::NewNode {
                node_id: "n1".into(),
                compo_id: String::new(),
                node_type: "menu".into(),
                is_compo: false,
            }
        );

        let change = Change {
            action: 3,
            node_id: Some("n1".into()),
            key: Some("label".into()),
            ..Change::default()
        };
        assert_eq!(
            change.to_mutation().unwrap(),
            Mutation::SetAttr {
                node_id: "n1".into(),
                key: "label".into(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn component_type_is_optional() {
        let change = Change {
            action: 1,
            node_id: Some("c1".into()),
            is_compo: Some(true),
            ..Change::default()
        };
        assert!(matches!(
            change.to_mutation().unwrap(),
            Mutation::NewNode { is_compo: true, .. }
        ));
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let err = Change {
            action: 6,
            node_id: Some("n1".into()),
            ..Change::default()
        }
        .to_mutation()
        .unwrap_err();
        assert_eq!(err.to_string(), "AppendChild change is missing the ChildID field");

        let err = Change {
            action: 1,
            node_id: Some("n1".into()),
            ..Change::default()
        }
        .to_mutation()
        .unwrap_err();
        assert!(matches!(err, ModelError::MissingField { field: "Type", .. }));

        let err = Change {
            action: 0,
            ..Change::default()
        }
        .to_mutation()
        .unwrap_err();
        assert!(matches!(err, ModelError::MissingField { field: "NodeID", .. }));
    }

    #[test]
    fn wire_names_are_pascal_case() {
        let changes = parse_changes(
            r#"[{"Action":1,"NodeID":"n1","CompoID":"c0","Type":"menuitem","IsCompo":false},
                {"Action":6,"NodeID":"n0","ChildID":"n1"}]"#,
        )
        .unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].compo_id.as_deref(), Some("c0"));
        assert_eq!(changes[1].child_id.as_deref(), Some("n1"));

        let json = serde_json::to_value(Change::set_attr("n1", "label", "Copy")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Action": 3, "NodeID": "n1", "Key": "label", "Value": "Copy"})
        );
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert!(matches!(
            parse_changes("{not json"),
            Err(ModelError::InvalidChanges(_))
        ));
    }
}
