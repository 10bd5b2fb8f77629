//! Cloud texture authoring binary: generates LUT and coverage map assets.
//!
//! Usage: cargo run --release --bin skytex -- [OPTIONS]
//!
//! Options:
//!   --out <DIR>        Output directory (default: assets/clouds)
//!   --format <FMT>     Texture format, png or exr (default: exr)
//!   --lut-height <N>   Gradient LUT rows (default: 64)
//!   --width <W>        Coverage map width (default: 1024)
//!   --height <H>       Coverage map height (default: 1024)
//!   --seed <SEED>      Noise seed (default: 0)
//!   --profile <PATH>   Volume profile JSON to bind the textures into
//!   --powder <V>       Only set powder intensity on --profile, skip generation
//!
//! Output structure:
//!   <out>/cloud_lut.<fmt>
//!   <out>/cloud_map.<fmt>

use std::path::{Path, PathBuf};
use std::time::Instant;

use skycycle::profile::{CloudBinding, VolumeProfile, VolumetricClouds, set_powder_intensity};
use skycycle::texgen::{
    CloudLutParams, CloudMapParams, generate_cloud_lut, generate_cloud_map, save_exr, save_png,
};

fn main() {
    skycycle::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let out_dir = PathBuf::from(
        parse_str_arg(&args, "--out").unwrap_or_else(|| "assets/clouds".to_string()),
    );
    let format = parse_str_arg(&args, "--format").unwrap_or_else(|| "exr".to_string());
    let lut_height = parse_u32_arg(&args, "--lut-height").unwrap_or(64);
    let width = parse_u32_arg(&args, "--width").unwrap_or(1024);
    let height = parse_u32_arg(&args, "--height").unwrap_or(1024);
    let seed = parse_u32_arg(&args, "--seed").unwrap_or(0);
    let profile_path = parse_str_arg(&args, "--profile").map(PathBuf::from);
    let powder = parse_f32_arg(&args, "--powder");

    if format != "png" && format != "exr" {
        eprintln!("Unknown format '{}', expected png or exr", format);
        std::process::exit(1);
    }

    // Powder-only mode: adjust an existing profile without touching textures
    if let Some(intensity) = powder {
        let Some(path) = profile_path else {
            eprintln!("--powder requires --profile");
            std::process::exit(1);
        };
        if let Err(err) = apply_powder(&path, intensity) {
            eprintln!("Failed to update profile: {err}");
            std::process::exit(1);
        }
        println!("Set powder intensity {} on {}", intensity, path.display());
        return;
    }

    println!("=== Skycycle Cloud Texture Generator ===");
    println!("LUT:    1 x {}", lut_height);
    println!("Map:    {} x {}", width, height);
    println!("Seed:   {}", seed);
    println!("Format: {}", format);
    println!("Output: {}", out_dir.display());
    println!();

    std::fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    let start = Instant::now();

    let lut_params = CloudLutParams {
        height: lut_height,
        ..Default::default()
    };
    let map_params = CloudMapParams {
        width,
        height,
        seed,
        ..Default::default()
    };

    let lut = generate_cloud_lut(&lut_params);
    let map = generate_cloud_map(&map_params);

    let lut_path = out_dir.join(format!("cloud_lut.{}", format));
    let map_path = out_dir.join(format!("cloud_map.{}", format));

    let save = if format == "png" { save_png } else { save_exr };
    save(&lut, &lut_path).expect("Failed to write cloud LUT");
    save(&map, &map_path).expect("Failed to write cloud map");

    println!(
        "Textures: 2 generated in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("  {}", lut_path.display());
    println!("  {}", map_path.display());

    if let Some(path) = profile_path {
        // Scattering tint follows the LUT bottom color convention
        let binding = CloudBinding {
            cloud_lut: Some(lut_path.clone()),
            cloud_map: Some(map_path.clone()),
            scattering_tint: [0.0, 0.4, 0.8],
        };
        match bind_profile(&path, &binding) {
            Ok(()) => println!("Profile:  bound textures into {}", path.display()),
            Err(err) => {
                eprintln!("Failed to bind profile: {err}");
                std::process::exit(1);
            }
        }
    }

    println!();
    println!("=== Generation Complete ===");
}

/// Bind into an existing profile, or create a fresh one with a clouds
/// section when the file does not exist yet.
fn bind_profile(path: &Path, binding: &CloudBinding) -> Result<(), skycycle::core::Error> {
    let profile = if path.exists() {
        VolumeProfile::load(path)?
    } else {
        VolumeProfile {
            name: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "clouds".to_string()),
            clouds: Some(VolumetricClouds::default()),
            extra: serde_json::Map::new(),
        }
    };
    let bound = skycycle::profile::bind_cloud_textures(&profile, binding)?;
    bound.save(path)?;
    Ok(())
}

fn apply_powder(path: &Path, intensity: f32) -> Result<(), skycycle::core::Error> {
    let profile = VolumeProfile::load(path)?;
    let updated = set_powder_intensity(&profile, intensity)?;
    updated.save(path)?;
    Ok(())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.clone())
}
