use crate::commands::{CmdMessage, CmdResult};
use crate::config::{unknown_key, GqlctlConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = GqlctlConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GqlctlConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(unknown_key(&key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = GqlctlConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_show_reads_back() {
        let temp = TempDir::new().unwrap();

        let set = run(
            temp.path(),
            ConfigAction::Set("endpoint".into(), "http://gw:9000/".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Success);
        assert_eq!(set.messages[0].content, "endpoint set to http://gw:9000");

        let shown = run(temp.path(), ConfigAction::ShowKey("endpoint".into())).unwrap();
        assert_eq!(shown.messages[0].content, "http://gw:9000");

        let all = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().endpoint, "http://gw:9000");
    }

    #[test]
    fn bad_values_are_reported_not_saved() {
        let temp = TempDir::new().unwrap();

        let res = run(
            temp.path(),
            ConfigAction::Set("timeout".into(), "never".into()),
        )
        .unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_reported() {
        let temp = TempDir::new().unwrap();
        let res = run(temp.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert_eq!(
            res.messages[0].content,
            "Unknown config key: colour (valid keys: endpoint, timeout)"
        );
    }
}
