use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = ScanProgress::new(3, true);
    progress.inc();
    progress.finish();

    assert!(progress.progress_bar.is_hidden());
}

#[test]
fn counter_is_shared_between_clones() {
    let progress = ScanProgress::new_with_visibility(10, false, false);
    let worker = progress.clone();

    progress.inc();
    worker.inc();

    assert_eq!(progress.counter.load(Ordering::Relaxed), 2);
    progress.finish();
}

#[test]
fn visible_bar_tracks_position() {
    let progress = ScanProgress::new_with_visibility(5, false, true);
    progress.inc();
    progress.inc();

    assert_eq!(progress.progress_bar.position(), 2);
    progress.finish();
}
