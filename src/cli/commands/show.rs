//! The `buildparam show` command.
//!
//! Prints every resolved parameter next to the layer that supplied it.
//! Signing passwords are masked.

use serde_json::json;

use crate::cli::args::ShowArgs;
use crate::config::{BuildParam, KEY_STORE_VAR};
use crate::error::{BuildParamError, Result};
use crate::resolver::{resolve_with_report, BuildSources, Resolution};
use crate::secrets::OutputMasker;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    context: CommandContext,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: CommandContext, args: ShowArgs) -> Self {
        Self { context, args }
    }

    fn table(
        &self,
        sources: &BuildSources,
        resolution: &Resolution,
        masker: &OutputMasker,
        details: bool,
    ) -> Table {
        let config = &resolution.config;
        let mut table = Table::new(["Parameter", "Value", "Source"]);

        for param in BuildParam::ALL {
            table.add_row([
                param.gradle_name().to_string(),
                config.param_value(param),
                resolution.source_of(param).to_string(),
            ]);
        }

        let keystore_path = sources.layout.keystore_properties_path();
        match config.signing().map(|s| masker.signing(s)) {
            Some(signing) => {
                let origin = keystore_path.display().to_string();
                table.add_row([
                    "storeFile".to_string(),
                    signing.store_file.display().to_string(),
                    origin.clone(),
                ]);
                table.add_row(["storePassword", signing.store_password, origin.as_str()]);
                table.add_row(["keyAlias", signing.key_alias, origin.as_str()]);
                table.add_row(["keyPassword", signing.key_password, origin.as_str()]);
            }
            None => {
                let reason = if self.context.environment().is_set(KEY_STORE_VAR) {
                    format!("{} unusable", keystore_path.display())
                } else {
                    format!("{} not set", KEY_STORE_VAR)
                };
                table.add_row(["signing".to_string(), "unsigned".to_string(), reason]);
            }
        }

        let local_path = sources.layout.local_properties_path().display().to_string();
        for (name, path) in [
            ("flutterSdk", config.flutter_sdk()),
            ("androidSdk", config.android_sdk()),
        ] {
            if let Some(path) = path {
                table.add_row([
                    name.to_string(),
                    path.display().to_string(),
                    local_path.clone(),
                ]);
            }
        }

        if details {
            let profile = config.release_profile();
            for (name, value) in [
                ("minifyEnabled", profile.minify_enabled),
                ("shrinkResources", profile.shrink_resources),
                ("debuggable", profile.debuggable),
                ("zipAlignEnabled", profile.zip_align_enabled),
            ] {
                table.add_row([
                    format!("release.{}", name),
                    value.to_string(),
                    "built-in".to_string(),
                ]);
            }
        }

        table
    }

    fn json_report(&self, resolution: &Resolution, masker: &OutputMasker) -> Result<String> {
        let config = &resolution.config;
        let parameters: serde_json::Map<String, serde_json::Value> = BuildParam::ALL
            .iter()
            .map(|&param| {
                (
                    param.gradle_name().to_string(),
                    json!({
                        "value": config.param_value(param),
                        "source": resolution.source_of(param),
                    }),
                )
            })
            .collect();

        let report = json!({
            "parameters": parameters,
            "signed": config.signing().is_some(),
            "signing": config.signing().map(|s| masker.signing(s)),
            "flutterSdk": config.flutter_sdk(),
            "androidSdk": config.android_sdk(),
            "warnings": resolution.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        });

        let mut output =
            serde_json::to_string_pretty(&report).map_err(|e| BuildParamError::Other(e.into()))?;
        output.push('\n');
        Ok(output)
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let sources = self.context.load_sources()?;
        let resolution = resolve_with_report(&sources)?;
        let masker = OutputMasker::new();

        if self.args.json {
            let report = self.json_report(&resolution, &masker)?;
            ui.emit(&report);
            return Ok(CommandResult::success());
        }

        let config = &resolution.config;
        ui.show_header(&format!(
            "{} {} ({})",
            config.package_name(),
            config.version_name(),
            config.version_code()
        ));

        let details = ui.output_mode().shows_details();
        let table = self.table(&sources, &resolution, &masker, details);
        ui.emit(&table.render());

        for warning in &resolution.warnings {
            ui.warning(&warning.to_string());
        }

        Ok(CommandResult::success())
    }
}
