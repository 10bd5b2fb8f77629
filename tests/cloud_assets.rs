//! End-to-end cloud asset authoring: synthesize, encode, bind.

use std::path::PathBuf;

use skycycle::profile::{
    CloudBinding, CloudControl, VolumeProfile, VolumetricClouds, bind_profile_file,
};
use skycycle::texgen::{
    CloudLutParams, CloudMapParams, generate_cloud_lut, generate_cloud_map, save_exr, save_png,
};

#[test]
fn generate_encode_and_bind_pipeline() {
    let dir = tempfile::tempdir().unwrap();

    // Synthesize
    let lut = generate_cloud_lut(&CloudLutParams::default());
    let map = generate_cloud_map(&CloudMapParams {
        width: 32,
        height: 32,
        ..Default::default()
    });

    // Encode
    let lut_path = dir.path().join("cloud_lut.exr");
    let map_path = dir.path().join("cloud_map.exr");
    save_exr(&lut, &lut_path).unwrap();
    save_exr(&map, &map_path).unwrap();
    assert!(lut_path.exists() && map_path.exists());

    // Bind into a profile on disk
    let profile_path = dir.path().join("sky_profile.json");
    VolumeProfile {
        name: "sky".to_string(),
        clouds: Some(VolumetricClouds::default()),
        extra: serde_json::Map::new(),
    }
    .save(&profile_path)
    .unwrap();

    let binding = CloudBinding {
        cloud_lut: Some(lut_path.clone()),
        cloud_map: Some(map_path.clone()),
        scattering_tint: [0.0, 0.4, 0.8],
    };
    bind_profile_file(&profile_path, &binding).unwrap();

    let bound = VolumeProfile::load(&profile_path).unwrap();
    let clouds = bound.clouds.unwrap();
    assert!(clouds.enabled);
    assert_eq!(clouds.control, CloudControl::Manual);
    assert_eq!(clouds.cloud_lut, Some(lut_path));
    assert_eq!(clouds.cloud_map, Some(map_path));
    assert_eq!(clouds.scattering_tint, [0.0, 0.4, 0.8]);
}

#[test]
fn binding_missing_profile_file_is_an_error() {
    let binding = CloudBinding {
        cloud_lut: None,
        cloud_map: None,
        scattering_tint: [1.0, 1.0, 1.0],
    };
    let missing = PathBuf::from("/nonexistent/profile.json");
    assert!(bind_profile_file(&missing, &binding).is_err());
}

#[test]
fn png_and_exr_encodings_agree_on_shape() {
    let dir = tempfile::tempdir().unwrap();
    let map = generate_cloud_map(&CloudMapParams {
        width: 16,
        height: 16,
        seed: 3,
        ..Default::default()
    });

    let png_path = dir.path().join("map.png");
    let exr_path = dir.path().join("map.exr");
    save_png(&map, &png_path).unwrap();
    save_exr(&map, &exr_path).unwrap();

    let png = image::open(&png_path).unwrap();
    let exr = image::open(&exr_path).unwrap();
    assert_eq!(png.width(), exr.width());
    assert_eq!(png.height(), exr.height());
}
