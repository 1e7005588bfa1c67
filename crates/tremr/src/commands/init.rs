use tremr_core::ObserverConfig;
use tremr_store::{load_or_create_config, save_config, Paths};

use crate::cli::InitArgs;

pub fn run(paths: &Paths, args: &InitArgs) -> anyhow::Result<()> {
    let path = paths.config_file();
    let mut config = load_or_create_config(&path)?;

    if apply(&mut config, args) {
        save_config(&path, &config)?;
        println!("✓ Updated {}", path.display());
    } else {
        println!("✓ Using {}", path.display());
    }

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Copy any provided settings onto `config`; true if something was given
fn apply(config: &mut ObserverConfig, args: &InitArgs) -> bool {
    let mut changed = false;

    if let Some(latitude) = args.latitude {
        config.latitude = latitude;
        changed = true;
    }
    if let Some(longitude) = args.longitude {
        config.longitude = longitude;
        changed = true;
    }
    if let Some(radius_km) = args.radius_km {
        config.radius_km = radius_km;
        changed = true;
    }
    if let Some(min_magnitude) = args.min_magnitude {
        config.min_magnitude = min_magnitude;
        changed = true;
    }
    if let Some(interval) = args.poll_interval_seconds {
        config.poll_interval_seconds = interval;
        changed = true;
    }
    if let Some(address) = &args.address {
        config.address = Some(address.clone());
        changed = true;
    }
    if let Some(sound) = args.sound {
        config.sound_enabled = sound;
        changed = true;
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_data_dir(temp.path());

        run(&paths, &InitArgs::default()).unwrap();

        let written = std::fs::read_to_string(paths.config_file()).unwrap();
        let config = ObserverConfig::from_json_str(&written).unwrap();
        assert_eq!(config, ObserverConfig::default());
    }

    #[test]
    fn test_init_updates_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_data_dir(temp.path());
        let args = InitArgs {
            latitude: Some(10.3157),
            longitude: Some(123.8854),
            address: Some("Cebu City".to_string()),
            ..InitArgs::default()
        };

        run(&paths, &args).unwrap();

        let config = load_or_create_config(&paths.config_file()).unwrap();
        assert_eq!(config.latitude, 10.3157);
        assert_eq!(config.longitude, 123.8854);
        assert_eq!(config.address.as_deref(), Some("Cebu City"));
        assert_eq!(config.radius_km, ObserverConfig::default().radius_km);
    }

    #[test]
    fn test_init_rejects_invalid_setting() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_data_dir(temp.path());
        run(&paths, &InitArgs::default()).unwrap();

        let args = InitArgs {
            poll_interval_seconds: Some(1),
            ..InitArgs::default()
        };
        assert!(run(&paths, &args).is_err());

        let config = load_or_create_config(&paths.config_file()).unwrap();
        assert_eq!(config.poll_interval_seconds, 60);
    }

    #[test]
    fn test_apply_without_args_is_noop() {
        let mut config = ObserverConfig::default();
        assert!(!apply(&mut config, &InitArgs::default()));
        assert_eq!(config, ObserverConfig::default());
    }
}
