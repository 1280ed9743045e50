//! Test helpers for writing rank requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use placerank_core::{BudgetLevel, GeoPoint, Place, Review, UserProfile};
use placerank_scorer::RankRequest;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A downtown user who likes cosy places, with a reviewed cafe nearby and a
/// noisy bar without coordinates.
pub(super) fn sample_request() -> RankRequest {
    let downtown = GeoPoint::new(30.0444, 31.2357).expect("valid point");
    let level = BudgetLevel::try_from(1_i64).expect("valid level");
    let user = UserProfile::new()
        .with_preference("Cozy", 1.0)
        .with_budget(level)
        .with_location(downtown);
    let places = vec![
        Place::new("Loud Bar").with_review(Review::new("Terrible and noisy")),
        Place::new("Corner Cafe")
            .with_review(Review::new("A cozy spot with excellent tea"))
            .with_budget(level)
            .with_location(downtown),
    ];
    RankRequest::new(user, places)
}

pub(super) fn write_request(path: &Utf8Path, request: &RankRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
