//! Volume profile binding for volumetric clouds.
//!
//! A volume profile is a serialized rendering-configuration container. The
//! binder installs synthesized texture references plus fixed tuning
//! constants into a cloned profile and switches the clouds to manual
//! control. Pure orchestration: failures are logged and abort only the
//! current operation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// Cloud control mode of the rendering pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudControl {
    Simple,
    Advanced,
    Manual,
}

/// Volumetric cloud settings inside a volume profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VolumetricClouds {
    pub enabled: bool,
    pub control: CloudControl,
    /// Reference to the altitude gradient LUT texture.
    pub cloud_lut: Option<PathBuf>,
    /// Reference to the coverage map texture.
    pub cloud_map: Option<PathBuf>,
    pub scattering_tint: [f32; 3],
    pub powder_effect_intensity: f32,
    pub multi_scattering: f32,
}

impl Default for VolumetricClouds {
    fn default() -> Self {
        Self {
            enabled: false,
            control: CloudControl::Simple,
            cloud_lut: None,
            cloud_map: None,
            scattering_tint: [1.0, 1.0, 1.0],
            powder_effect_intensity: 0.0,
            multi_scattering: 0.0,
        }
    }
}

/// A rendering-pipeline configuration container. Only the volumetric-cloud
/// section is modeled; a real profile carries many more effect blocks, which
/// pass through `extra` untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VolumeProfile {
    pub name: String,
    pub clouds: Option<VolumetricClouds>,
    /// Unmodeled effect sections, preserved verbatim across edits.
    #[serde(default, flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VolumeProfile {
    /// Load a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save the profile to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

/// Texture references and tint installed into a profile by
/// [`bind_cloud_textures`].
#[derive(Clone, Debug)]
pub struct CloudBinding {
    pub cloud_lut: Option<PathBuf>,
    pub cloud_map: Option<PathBuf>,
    /// Scattering tint; the authoring tools pass the LUT's bottom color.
    pub scattering_tint: [f32; 3],
}

/// Powder effect intensity installed on every bind.
pub const POWDER_EFFECT_INTENSITY: f32 = 1.0;
/// Multi-scattering factor installed on every bind.
pub const MULTI_SCATTERING: f32 = 0.7;

/// Install texture references and tuning constants into a clone of the
/// profile, enabling manual cloud control. The input profile is never
/// mutated. A profile without a clouds section aborts the operation.
pub fn bind_cloud_textures(
    profile: &VolumeProfile,
    binding: &CloudBinding,
) -> Result<VolumeProfile, Error> {
    let mut bound = profile.clone();

    let Some(clouds) = bound.clouds.as_mut() else {
        log::warn!(
            "Volume profile '{}' has no volumetric clouds section",
            profile.name
        );
        return Err(Error::Profile(format!(
            "no volumetric clouds section in profile '{}'",
            profile.name
        )));
    };

    clouds.enabled = true;
    clouds.control = CloudControl::Manual;
    if binding.cloud_lut.is_some() {
        clouds.cloud_lut = binding.cloud_lut.clone();
    }
    if binding.cloud_map.is_some() {
        clouds.cloud_map = binding.cloud_map.clone();
    }
    clouds.scattering_tint = binding.scattering_tint;
    clouds.powder_effect_intensity = POWDER_EFFECT_INTENSITY;
    clouds.multi_scattering = MULTI_SCATTERING;

    log::info!("Bound cloud textures into volume profile '{}'", bound.name);
    Ok(bound)
}

/// Set only the powder effect intensity on a clone of the profile.
pub fn set_powder_intensity(
    profile: &VolumeProfile,
    intensity: f32,
) -> Result<VolumeProfile, Error> {
    let mut updated = profile.clone();

    let Some(clouds) = updated.clouds.as_mut() else {
        log::warn!(
            "Volume profile '{}' has no volumetric clouds section",
            profile.name
        );
        return Err(Error::Profile(format!(
            "no volumetric clouds section in profile '{}'",
            profile.name
        )));
    };

    clouds.powder_effect_intensity = intensity.clamp(0.0, 1.0);
    log::info!(
        "Set powder effect intensity to {} on profile '{}'",
        clouds.powder_effect_intensity,
        updated.name
    );
    Ok(updated)
}

/// Load a profile from disk, bind the textures, and write the result back.
pub fn bind_profile_file(path: &Path, binding: &CloudBinding) -> Result<(), Error> {
    let profile = VolumeProfile::load(path)?;
    let bound = bind_cloud_textures(&profile, binding)?;
    bound.save(path)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
