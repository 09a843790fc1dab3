// Export wiring: save dialog on the UI thread, rasterization on a dedicated
// worker, completion reported over a channel polled each frame. The busy
// flag blocks re-entry until the task reports back.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::OnceLock;

use eframe::egui;
use tokio::runtime::Runtime;

use crate::export::{snapshot, ExportJob};
use crate::localization::translate;
use crate::ui_constants::export as consts;

static EXPORT_RT: OnceLock<Runtime> = OnceLock::new();

/// Runtime hosting the rasterization tasks. One worker is enough: the busy
/// flag guarantees at most one export runs at a time.
fn export_runtime() -> &'static Runtime {
    EXPORT_RT.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("export-worker")
            .build()
            .expect("failed to build export runtime")
    })
}

pub(super) struct ExportState {
    pub in_progress: bool,
    pub last_error: Option<String>,
    tx: mpsc::Sender<Result<PathBuf, String>>,
    rx: mpsc::Receiver<Result<PathBuf, String>>,
}

impl ExportState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            in_progress: false,
            last_error: None,
            tx,
            rx,
        }
    }
}

impl super::ValueDeckApp {
    /// Starts an export of the current selection. No-op while an export is
    /// running, when nothing is selected, or when the user cancels the save
    /// dialog.
    pub(super) fn start_export(&mut self, ctx: &egui::Context) {
        if self.export.in_progress || self.selection.is_empty() {
            return;
        }
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(consts::FILE_NAME)
            .save_file()
        else {
            return;
        };

        // Freeze the selection and all localized strings now; the task must
        // not touch live app state.
        let job = ExportJob {
            title: translate("export-title"),
            cards: snapshot(&self.deck, &self.selection),
            path,
        };
        log::info!("export started: {} cards -> {}", job.cards.len(), job.path.display());

        self.export.in_progress = true;
        self.export.last_error = None;

        let tx = self.export.tx.clone();
        let ctx2 = ctx.clone();
        export_runtime().spawn(async move {
            let out = job.path.clone();
            let res = tokio::task::spawn_blocking(move || crate::export::render_and_save(&job)).await;
            let msg = match res {
                Ok(Ok(())) => Ok(out),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("export task failed: {e}")),
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    pub(super) fn poll_export(&mut self, ctx: &egui::Context) {
        while let Ok(res) = self.export.rx.try_recv() {
            self.export.in_progress = false;
            match res {
                Ok(path) => {
                    log::info!("export written: {}", path.display());
                }
                Err(err) => {
                    log::error!("export failed: {err}");
                    super::errors_ui::append_error(&err);
                    self.export.last_error = Some(err);
                }
            }
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn export_runtime_completes_blocking_work() {
        // Same shape as the real task: blocking work on the runtime,
        // result reported over an mpsc channel.
        let (tx, rx) = mpsc::channel();
        export_runtime().spawn(async move {
            let res = tokio::task::spawn_blocking(|| 7u32).await;
            let _ = tx.send(res.map_err(|e| e.to_string()));
        });
        let got = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(got, Ok(7));
    }
}
