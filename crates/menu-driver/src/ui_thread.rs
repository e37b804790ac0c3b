//! Running a driver on a dedicated UI thread.
//!
//! Native menu toolkits only accept calls from the thread that created their
//! controls. [`UiThread`] builds the toolkit on its own named thread and feeds
//! it work through a channel:
//!
//! ```text
//! [caller] --job--> [crossbeam channel] --> [UI thread: MenuDriver] --reply--> [caller]
//! ```
//!
//! Jobs run one at a time in submission order.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use menu_core::MenuToolkit;
use menu_model::{HostCall, HostReturn};
use tracing::{debug, error};

use crate::config::DriverConfig;
use crate::driver::MenuDriver;
use crate::error::{DriverError, Result};

type Job<T> = Box<dyn FnOnce(&mut MenuDriver<T>) + Send>;

/// Handle to a driver running on its own thread.
///
/// Dropping the handle stops accepting work, lets queued jobs finish, releases
/// every menu and joins the thread.
pub struct UiThread<T: MenuToolkit> {
    sender: Option<Sender<Job<T>>>,
    handle: Option<JoinHandle<()>>,
    name: String,
}

impl<T: MenuToolkit + 'static> UiThread<T> {
    /// Spawn the UI thread. `make_toolkit` runs on the new thread, so the
    /// toolkit itself never crosses threads.
    pub fn spawn<F>(config: DriverConfig, make_toolkit: F) -> Result<Self>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (sender, receiver) = crossbeam_channel::unbounded::<Job<T>>();
        let name = config.thread_name.clone();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                let mut driver = MenuDriver::new(make_toolkit(), config);
                debug!("UI thread started");
                for job in receiver.iter() {
                    job(&mut driver);
                }
                driver.shutdown();
                debug!("UI thread stopped");
            })
            .map_err(DriverError::Spawn)?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Queue `work` against the driver. The returned receiver yields its
    /// result once it has run, or disconnects if the thread is gone.
    pub fn run<R, F>(&self, work: F) -> Receiver<R>
    where
        F: FnOnce(&mut MenuDriver<T>) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (reply, completion) = crossbeam_channel::bounded(1);
        let job: Job<T> = Box::new(move |driver| {
            // The caller may have stopped waiting.
            let _ = reply.send(work(driver));
        });
        if let Some(sender) = &self.sender
            && sender.send(job).is_err()
        {
            error!(thread = %self.name, "UI thread is gone, dropping job");
        }
        completion
    }

    /// Run `work` and wait for its result.
    pub fn exec<R, F>(&self, work: F) -> Result<R>
    where
        F: FnOnce(&mut MenuDriver<T>) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.run(work)
            .recv()
            .map_err(|_| DriverError::Disconnected)
    }

    /// Queue a host call; the receiver completes with its reply.
    pub fn submit(&self, call: HostCall) -> Receiver<HostReturn> {
        self.run(move |driver| driver.handle_call(&call))
    }

    /// Run a host call and wait for its reply.
    pub fn call(&self, call: HostCall) -> Result<HostReturn> {
        self.submit(call)
            .recv()
            .map_err(|_| DriverError::Disconnected)
    }
}

impl<T: MenuToolkit> Drop for UiThread<T> {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            error!(thread = %self.name, "UI thread panicked");
        }
    }
}
