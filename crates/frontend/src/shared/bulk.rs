//! Concurrent fan-out of one request per selected id.

use contracts::shared::bulk::BulkReport;
use futures_util::future::join_all;
use std::future::Future;

use super::api_error::ApiError;
use super::toast::ToastKind;

/// Run `op` for every id concurrently and collect a per-id report in input order.
pub async fn run_bulk<F, Fut>(ids: Vec<String>, op: F) -> BulkReport
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let pending = ids.iter().cloned().map(&op);
    let results = join_all(pending).await;
    for (id, result) in ids.iter().zip(&results) {
        if let Err(e) = result {
            log::warn!("bulk item {} failed: {}", id, e);
        }
    }
    BulkReport::from_results(
        ids.into_iter()
            .zip(results)
            .map(|(id, r)| (id, r.map_err(|e| e.user_message()))),
    )
}

/// Toast for a finished bulk action. `done` is the past participle ("supprimé(s)").
pub fn bulk_summary(report: &BulkReport, done: &str) -> (ToastKind, String) {
    let ok = report.succeeded_count();
    let failed = report.failed_count();
    if failed == 0 {
        (ToastKind::Success, format!("{} élément(s) {}", ok, done))
    } else if ok == 0 {
        let reason = report
            .failures()
            .first()
            .map(|(_, reason)| reason.clone())
            .unwrap_or_default();
        (ToastKind::Error, format!("Échec pour {} élément(s): {}", failed, reason))
    } else {
        (
            ToastKind::Error,
            format!("{} élément(s) {}, {} en échec", ok, done, failed),
        )
    }
}

/// Ids to keep selected after the action.
pub fn failed_ids(report: &BulkReport) -> Vec<String> {
    report.failures().into_iter().map(|(id, _)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::{ready, FutureExt};

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_bulk_collects_each_outcome() {
        let report = run_bulk(ids(&["a", "b", "c"]), |id| {
            ready(if id == "b" {
                Err(ApiError::from_status(500, Some("verrouillé".into())))
            } else {
                Ok(())
            })
        })
        .now_or_never()
        .unwrap();

        assert_eq!(report.succeeded_ids(), ids(&["a", "c"]));
        assert_eq!(report.failures(), vec![("b".to_string(), "verrouillé".to_string())]);
        assert_eq!(failed_ids(&report), ids(&["b"]));
    }

    #[test]
    fn test_bulk_summary() {
        let all_ok = run_bulk(ids(&["a", "b"]), |_| ready(Ok(()))).now_or_never().unwrap();
        assert_eq!(
            bulk_summary(&all_ok, "supprimé(s)"),
            (ToastKind::Success, "2 élément(s) supprimé(s)".to_string())
        );

        let partial = run_bulk(ids(&["a", "b"]), |id| {
            ready(if id == "a" { Ok(()) } else { Err(ApiError::NotFound) })
        })
        .now_or_never()
        .unwrap();
        assert_eq!(
            bulk_summary(&partial, "supprimé(s)"),
            (ToastKind::Error, "1 élément(s) supprimé(s), 1 en échec".to_string())
        );

        let none = run_bulk(ids(&["a"]), |_| ready(Err(ApiError::Network("x".into()))))
            .now_or_never()
            .unwrap();
        assert_eq!(bulk_summary(&none, "supprimé(s)").0, ToastKind::Error);
    }

    #[test]
    fn test_empty_bulk() {
        let report = run_bulk(Vec::new(), |_| ready(Ok(()))).now_or_never().unwrap();
        assert!(report.is_complete_success());
    }
}
