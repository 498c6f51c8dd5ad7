//! Config subcommand handlers.

use dialoguer::{Input, Select};

use beamlab_core::{DEFAULT_SERVER, SessionConfig};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

const OUTPUT_CHOICES: &[&str] = &["table", "json", "json-compact", "yaml", "plain"];
const COLOR_CHOICES: &[&str] = &["auto", "always", "never"];

// ── Helpers ─────────────────────────────────────────────────────────

/// Render the config as TOML, the shape it has on disk.
fn format_config(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).map_or_else(
        |e| format!("# could not render config: {e}"),
        |s| s.trim_end().to_owned(),
    )
}

fn save_config(cfg: &Config) -> Result<(), CliError> {
    let path = config::save_config(cfg)?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn one_of(field: &str, value: &str, choices: &[&str]) -> Result<String, CliError> {
    if choices.contains(&value) {
        Ok(value.to_owned())
    } else {
        Err(CliError::Validation {
            field: field.into(),
            reason: format!("must be one of: {}", choices.join(", ")),
        })
    }
}

/// Apply `key = value` to the config.
///
/// Plain keys target the active profile, `defaults.*` the global
/// defaults and `link.*` the link defaults.
fn apply_set(cfg: &mut Config, profile_name: &str, key: &str, value: &str) -> Result<(), CliError> {
    if let Some(link_key) = key.strip_prefix("link.") {
        cfg.link.set(link_key, value)?;
        return Ok(());
    }

    match key {
        "defaults.output" => cfg.defaults.output = one_of("output", value, OUTPUT_CHOICES)?,
        "defaults.color" => cfg.defaults.color = one_of("color", value, COLOR_CHOICES)?,
        "defaults.timeout" => cfg.defaults.timeout = Some(parse_timeout(value)?),
        "server" => {
            SessionConfig::from_server(value).map_err(|e| CliError::Validation {
                field: "server".into(),
                reason: format!("invalid URL '{value}': {e}"),
            })?;
            profile_entry(cfg, profile_name).server = value.to_owned();
        }
        "timeout" => {
            let secs = parse_timeout(value)?;
            profile_entry(cfg, profile_name).timeout = Some(secs);
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: server, timeout, \
                     defaults.output, defaults.color, defaults.timeout, link.<{}>",
                    config::LINK_KEYS.join("|")
                ),
            });
        }
    }
    Ok(())
}

fn profile_entry<'a>(cfg: &'a mut Config, name: &str) -> &'a mut Profile {
    cfg.profiles.entry(name.to_owned()).or_default()
}

fn parse_timeout(value: &str) -> Result<u64, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: "timeout".into(),
        reason: "must be a whole number of seconds".into(),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("Beamforming Lab CLI configuration");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let server: String = Input::new()
                .with_prompt("Backend URL")
                .default(DEFAULT_SERVER.into())
                .validate_with(|s: &String| SessionConfig::from_server(s).map(|_| ()))
                .interact_text()
                .map_err(prompt_err)?;

            let timeout: String = Input::new()
                .with_prompt("Request timeout in seconds (empty for none)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let timeout = match timeout.trim() {
                "" => None,
                t => Some(parse_timeout(t)?),
            };

            let output_idx = Select::new()
                .with_prompt("Default output format")
                .items(OUTPUT_CHOICES)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            // Keep link defaults and other profiles from an existing file.
            let mut cfg = config::load_config()?;
            cfg.profiles
                .insert(profile_name.clone(), Profile { server, timeout });
            cfg.default_profile = Some(profile_name.clone());
            cfg.defaults.output = OUTPUT_CHOICES
                .get(output_idx)
                .copied()
                .unwrap_or("table")
                .into();

            save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: beamlab health");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(&global.format(), &cfg, format_config, |c| {
                c.default_profile.clone().unwrap_or_default()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            apply_set(&mut cfg, &profile_name, &key, &value)?;
            save_config(&cfg)?;
            if !global.quiet {
                if key.contains('.') {
                    eprintln!("✓ Set {key}");
                } else {
                    eprintln!("✓ Set {key} on profile '{profile_name}'");
                }
            }
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: beamlab config init");
            } else {
                for (name, profile) in &cfg.profiles {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}\t{}", profile.server);
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: cfg.available_profiles(),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beamlab_core::SystemGeneration;

    use super::*;

    #[test]
    fn set_targets_profile_defaults_and_link() {
        let mut cfg = Config::default();
        apply_set(&mut cfg, "lab", "server", "http://sim.lab:9000").unwrap();
        apply_set(&mut cfg, "lab", "timeout", "15").unwrap();
        apply_set(&mut cfg, "lab", "defaults.output", "yaml").unwrap();
        apply_set(&mut cfg, "lab", "link.system", "6G").unwrap();

        let lab = &cfg.profiles["lab"];
        assert_eq!(lab.server, "http://sim.lab:9000");
        assert_eq!(lab.timeout, Some(15));
        assert_eq!(cfg.defaults.output, "yaml");
        assert_eq!(cfg.link.system, Some(SystemGeneration::SixG));
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut cfg = Config::default();
        assert!(apply_set(&mut cfg, "default", "server", "not a url").is_err());
        assert!(apply_set(&mut cfg, "default", "timeout", "soon").is_err());
        assert!(apply_set(&mut cfg, "default", "defaults.color", "rainbow").is_err());
        assert!(apply_set(&mut cfg, "default", "link.power_dbm", "loud").is_err());
        assert!(apply_set(&mut cfg, "default", "controller", "x").is_err());
        assert!(cfg.profiles.is_empty());
    }
}
