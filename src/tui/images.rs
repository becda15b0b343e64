//! Background probes for images referenced by the current slide.
//!
//! Each local image not seen before is marked `Loading` and checked on a
//! tokio task. The result comes back as `Action::ImageProbed` over the same
//! channel the event loop drains for all background work.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::core::action::Action;
use crate::core::state::{App, ImageStatus};

/// Start probes for the current slide's images that have no status yet.
/// Returns the paths that were queued.
pub fn probe_current_slide(app: &mut App, tx: &mpsc::Sender<Action>) -> Vec<PathBuf> {
    let pending: Vec<PathBuf> = match app.slide() {
        Some(slide) => slide
            .images
            .iter()
            .filter(|path| !app.images.contains_key(*path))
            .cloned()
            .collect(),
        None => Vec::new(),
    };
    for path in &pending {
        app.images.insert(path.clone(), ImageStatus::Loading);
        spawn_probe(path.clone(), tx.clone());
    }
    pending
}

fn spawn_probe(path: PathBuf, tx: mpsc::Sender<Action>) {
    debug!("Probing image {}", path.display());
    tokio::spawn(async move {
        let loaded = is_readable_file(&path).await;
        if tx.send(Action::ImageProbed { path, loaded }).is_err() {
            warn!("Failed to report image probe: receiver dropped");
        }
    });
}

async fn is_readable_file(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.is_file() && meta.len() > 0,
        Err(e) => {
            debug!("Image probe for {} failed: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::deck::Deck;

    fn app_in(dir: &Path, body: &str) -> App {
        let deck = Deck::parse(body, "imgs".to_string(), dir.to_path_buf()).unwrap();
        App::new(deck, Vec::new(), 1)
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("slidenav-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_probe_reports_loaded_and_failed() {
        let dir = scratch_dir("probe");
        std::fs::write(dir.join("real.png"), b"png").unwrap();
        let mut app = app_in(&dir, "![a](real.png) ![b](missing.png)");
        let (tx, rx) = mpsc::channel();

        let queued = probe_current_slide(&mut app, &tx);
        assert_eq!(queued.len(), 2);
        assert_eq!(app.image_status("real.png"), ImageStatus::Loading);

        for _ in 0..2 {
            let action = rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
            update(&mut app, action);
        }
        assert_eq!(app.image_status("real.png"), ImageStatus::Loaded);
        assert_eq!(app.image_status("missing.png"), ImageStatus::Failed);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_known_images_not_reprobed() {
        let dir = scratch_dir("reprobe");
        let mut app = app_in(&dir, "![a](x.png)");
        let (tx, _rx) = mpsc::channel();
        assert_eq!(probe_current_slide(&mut app, &tx).len(), 1);
        assert!(probe_current_slide(&mut app, &tx).is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_remote_images_never_probed() {
        let dir = scratch_dir("remote");
        let mut app = app_in(&dir, "![a](https://example.com/a.png)");
        let (tx, _rx) = mpsc::channel();
        assert!(probe_current_slide(&mut app, &tx).is_empty());
        assert_eq!(app.image_status("https://example.com/a.png"), ImageStatus::Loaded);
        std::fs::remove_dir_all(&dir).ok();
    }
}
