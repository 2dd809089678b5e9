//! YAML transfer presets.
//!
//! A preset is a [`TransferOptions`] document. Every field is optional:
//!
//! ```yaml
//! lab: true
//! hsl: false
//! contrast: 1.25
//! ```
//!
//! Command line flags override preset values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chromatch_color::{Pipeline, TransferOptions};

/// Reads a preset file.
pub fn load_preset(path: &Path) -> Result<TransferOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset: {}", path.display()))?;
    parse_preset(&text).with_context(|| format!("Invalid preset: {}", path.display()))
}

/// Parses preset text. An empty document yields the defaults.
pub fn parse_preset(text: &str) -> Result<TransferOptions> {
    if text.trim().is_empty() {
        return Ok(TransferOptions::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Resolved transfer settings: which pipelines run and where they write.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPlan {
    /// Options handed to the merge.
    pub options: TransferOptions,
    /// Output path per pipeline slot.
    pub outputs: [Option<PathBuf>; 2],
}

impl TransferPlan {
    /// Combines explicit flags with an optional preset.
    ///
    /// Giving an output path selects that pipeline. A pipeline enabled only
    /// by the preset writes next to the target as `<stem>_<pipeline>.png`.
    pub fn resolve(
        target: &Path,
        lab: Option<PathBuf>,
        hsl: Option<PathBuf>,
        contrast: Option<f64>,
        preset: Option<TransferOptions>,
    ) -> Result<Self> {
        let base = preset.unwrap_or(TransferOptions {
            lab: false,
            hsl: false,
            contrast: None,
        });

        let mut outputs = [lab, hsl];
        let mut options = base.with_contrast(contrast.or(base.contrast));
        for pipeline in Pipeline::ALL {
            let slot = &mut outputs[pipeline.slot()];
            if slot.is_none() && base.is_selected(pipeline) {
                *slot = Some(default_output(target, pipeline));
            }
        }
        options.lab = outputs[Pipeline::Lab.slot()].is_some();
        options.hsl = outputs[Pipeline::Hsl.slot()].is_some();

        if !options.lab && !options.hsl {
            bail!("Nothing to do: pass --lab and/or --hsl, or a preset enabling a pipeline");
        }
        Ok(Self { options, outputs })
    }

    /// Output path of `pipeline`, if it runs.
    pub fn output(&self, pipeline: Pipeline) -> Option<&Path> {
        self.outputs[pipeline.slot()].as_deref()
    }
}

/// `<dir>/<stem>_<pipeline>.png` next to `target`.
pub fn default_output(target: &Path, pipeline: Pipeline) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    target.with_file_name(format!("{stem}_{pipeline}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_preset() {
        let opts = parse_preset("contrast: 0.8\n").unwrap();
        assert!(opts.lab && opts.hsl);
        assert_eq!(opts.contrast, Some(0.8));
        assert_eq!(parse_preset("   \n").unwrap(), TransferOptions::default());
        assert!(parse_preset("lab: maybe").is_err());
    }

    #[test]
    fn test_load_preset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("look.yaml");
        fs::write(&path, "lab: false\nhsl: true\n").unwrap();
        let opts = load_preset(&path).unwrap();
        assert!(!opts.lab && opts.hsl);

        let err = load_preset(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_flags_select_pipelines() {
        let plan = TransferPlan::resolve(
            Path::new("in/tgt.png"),
            None,
            Some(PathBuf::from("out.png")),
            Some(2.0),
            None,
        )
        .unwrap();
        assert!(!plan.options.lab && plan.options.hsl);
        assert_eq!(plan.options.contrast, Some(2.0));
        assert_eq!(plan.output(Pipeline::Hsl), Some(Path::new("out.png")));
        assert_eq!(plan.output(Pipeline::Lab), None);
    }

    #[test]
    fn test_preset_fills_default_outputs() {
        let preset = TransferOptions::default().with_contrast(Some(1.1));
        let plan = TransferPlan::resolve(
            Path::new("shots/beach.jpg"),
            Some(PathBuf::from("mine.png")),
            None,
            None,
            Some(preset),
        )
        .unwrap();
        assert_eq!(plan.options.contrast, Some(1.1));
        assert_eq!(plan.output(Pipeline::Lab), Some(Path::new("mine.png")));
        assert_eq!(plan.output(Pipeline::Hsl), Some(Path::new("shots/beach_hsl.png")));
    }

    #[test]
    fn test_flag_contrast_overrides_preset() {
        let preset = TransferOptions::only(Pipeline::Lab).with_contrast(Some(1.1));
        let plan = TransferPlan::resolve(Path::new("t.png"), None, None, Some(0.5), Some(preset)).unwrap();
        assert_eq!(plan.options.contrast, Some(0.5));
        assert!(plan.options.lab && !plan.options.hsl);
    }

    #[test]
    fn test_nothing_selected() {
        assert!(TransferPlan::resolve(Path::new("t.png"), None, None, None, None).is_err());
    }
}
