use serde_json::{json, Value};
use tremr_core::ObserverConfig;
use tremr_store::{read_json, Paths, SeenStore};

use crate::lock::InstanceLock;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    println!("{}", collect(paths)?);
    Ok(())
}

fn collect(paths: &Paths) -> anyhow::Result<Value> {
    let config_path = paths.config_file();
    let raw_config: Option<Value> = read_json(&config_path).unwrap_or(None);
    let config_state = match std::fs::read_to_string(&config_path) {
        Ok(contents) => match ObserverConfig::from_json_str(&contents) {
            Ok(_) => "valid".to_string(),
            Err(e) => format!("invalid: {e}"),
        },
        Err(_) => "missing".to_string(),
    };

    let seen = match SeenStore::new(paths.seen_file()).try_load() {
        Ok(Some(set)) => json!(set.len()),
        Ok(None) => json!(0),
        Err(e) => json!(format!("unreadable: {e}")),
    };

    Ok(json!({
        "data_dir": paths.data_dir.display().to_string(),
        "config": raw_config,
        "config_state": config_state,
        "seen_events": seen,
        "running": InstanceLock::is_held(&paths.lock_file()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tremr_core::EventIdentity;
    use tremr_store::{save_config, SeenEventSet};

    #[test]
    fn test_status_on_empty_data_dir() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_data_dir(temp.path());

        let status = collect(&paths).unwrap();
        assert_eq!(status["config_state"], "missing");
        assert_eq!(status["seen_events"], 0);
        assert_eq!(status["running"], false);
        assert!(status["config"].is_null());
    }

    #[test]
    fn test_status_reports_config_and_seen_count() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_data_dir(temp.path());
        save_config(&paths.config_file(), &ObserverConfig::default()).unwrap();
        let set: SeenEventSet = ["a", "b", "c"]
            .into_iter()
            .map(EventIdentity::new)
            .collect();
        SeenStore::new(paths.seen_file()).persist(&set).unwrap();

        let status = collect(&paths).unwrap();
        assert_eq!(status["config_state"], "valid");
        assert_eq!(status["config"]["radius_km"], 100.0);
        assert_eq!(status["seen_events"], 3);
    }

    #[test]
    fn test_status_ignores_stale_lock() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_data_dir(temp.path());
        std::fs::write(paths.lock_file(), "4194305").unwrap();
        assert_eq!(collect(&paths).unwrap()["running"], false);

        let _lock = InstanceLock::acquire(&paths.lock_file()).unwrap();
        assert_eq!(collect(&paths).unwrap()["running"], true);
    }

    #[test]
    fn test_status_flags_corrupt_files() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_data_dir(temp.path());
        std::fs::write(paths.config_file(), r#"{"latitude": 123}"#).unwrap();
        std::fs::write(paths.seen_file(), "{not json").unwrap();

        let status = collect(&paths).unwrap();
        assert!(status["config_state"].as_str().unwrap().starts_with("invalid"));
        assert!(status["seen_events"]
            .as_str()
            .unwrap()
            .starts_with("unreadable"));
    }
}
