use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use retina_core::pipeline::{Mode, RetinaParams, SessionConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    PassThrough,
    AdaptiveContrast,
    Edge,
    Ganglion,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::PassThrough => Mode::PassThrough,
            ModeArg::AdaptiveContrast => Mode::AdaptiveContrast,
            ModeArg::Edge => Mode::EdgePathway,
            ModeArg::Ganglion => Mode::GanglionDoG,
        }
    }
}

/// Mode and parameter flags shared by the processing commands.
///
/// Flags override values loaded from `--config`.
#[derive(Args, Clone, Debug, Default)]
pub struct SessionArgs {
    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Filter mode [default: ganglion]
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Center (excitatory) Gaussian sigma [default: 1.0]
    #[arg(long)]
    pub sigma_e: Option<f32>,

    /// Surround (inhibitory) Gaussian sigma [default: 2.0]
    #[arg(long)]
    pub sigma_i: Option<f32>,

    /// Response gain [default: 10.0]
    #[arg(long)]
    pub gain: Option<f32>,
}

impl SessionArgs {
    pub fn resolve(&self) -> Result<SessionConfig> {
        let base = match self.config {
            Some(ref path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                toml::from_str(&contents).context("Invalid session config")?
            }
            None => SessionConfig::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, base: SessionConfig) -> SessionConfig {
        let params = RetinaParams::clamped(
            self.sigma_e.unwrap_or(base.params.sigma_excitatory),
            self.sigma_i.unwrap_or(base.params.sigma_inhibitory),
            self.gain.unwrap_or(base.params.gain),
        );
        SessionConfig {
            mode: self.mode.map(Mode::from).unwrap_or(base.mode),
            params,
        }
    }
}

/// Short file-name tag for a mode.
pub fn mode_slug(mode: Mode) -> &'static str {
    match mode {
        Mode::PassThrough => "passthrough",
        Mode::AdaptiveContrast => "contrast",
        Mode::EdgePathway => "edges",
        Mode::GanglionDoG => "ganglion",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let args = SessionArgs {
            mode: Some(ModeArg::Edge),
            sigma_i: Some(5.0),
            ..Default::default()
        };
        let base = SessionConfig {
            mode: Mode::PassThrough,
            params: RetinaParams::clamped(1.5, 3.0, 7.0),
        };
        let session = args.apply(base);
        assert_eq!(session.mode, Mode::EdgePathway);
        assert_eq!(session.params.sigma_excitatory, 1.5);
        assert_eq!(session.params.sigma_inhibitory, 5.0);
        assert_eq!(session.params.gain, 7.0);
    }

    #[test]
    fn flag_sigmas_are_clamped() {
        let args = SessionArgs {
            sigma_e: Some(0.0),
            ..Default::default()
        };
        let session = args.apply(SessionConfig::default());
        assert_eq!(session.params.sigma_excitatory, 0.1);
        assert_eq!(session.mode, Mode::GanglionDoG);
    }

    #[test]
    fn resolve_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "mode = \"PassThrough\"\n[params]\ngain = 2.0\n").unwrap();
        let args = SessionArgs {
            config: Some(path),
            ..Default::default()
        };
        let session = args.resolve().unwrap();
        assert_eq!(session.mode, Mode::PassThrough);
        assert_eq!(session.params.gain, 2.0);
        assert_eq!(session.params.sigma_excitatory, 1.0);
    }

    #[test]
    fn mode_arg_maps_every_mode() {
        let mapped: Vec<Mode> = ModeArg::value_variants()
            .iter()
            .map(|&m| Mode::from(m))
            .collect();
        assert_eq!(mapped, Mode::ALL.to_vec());
    }
}
