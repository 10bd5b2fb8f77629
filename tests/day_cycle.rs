//! Multi-tick day/night simulation properties.

use skycycle::daynight::{
    CaptureSink, DayNightConfig, DayNightSystem, LightingPreset, Skybox,
};

fn running_from(start_hour: f32, speed: f32) -> DayNightSystem {
    let config = DayNightConfig {
        start_hour,
        speed_of_day: speed,
        time_paused: false,
        ..Default::default()
    };
    DayNightSystem::with_preset(config, LightingPreset::default())
}

#[test]
fn hour_stays_in_range_across_many_ticks() {
    let mut sys = running_from(0.0, 5.0);
    let mut sink = CaptureSink::default();
    for _ in 0..5000 {
        let hour = sys.update(0.016, &mut sink);
        assert!((0.0..24.0).contains(&hour), "hour {hour} escaped [0,24)");
    }
    assert!(sys.day_count() > 0, "simulation should have wrapped at least one day");
}

#[test]
fn skybox_refreshes_once_per_dawn_transition() {
    // Start just before dawn and tick across t=0.25 (6:00)
    let mut sys = running_from(5.5, 1.0);
    let mut sink = CaptureSink::default();

    sys.update(0.0, &mut sink);
    assert_eq!(sink.skybox, Some(Skybox::Night));
    let baseline = sink.refresh_count; // initial application

    // 120 ticks of 0.01h: crosses 6:00 and keeps going to ~6.7
    for _ in 0..120 {
        sys.update(0.01, &mut sink);
    }

    assert_eq!(sink.skybox, Some(Skybox::Day));
    assert_eq!(
        sink.refresh_count,
        baseline + 1,
        "exactly one refresh for the night-to-day transition"
    );
}

#[test]
fn skybox_refreshes_twice_over_a_full_day() {
    let mut sys = running_from(0.0, 1.0);
    let mut sink = CaptureSink::default();

    sys.update(0.0, &mut sink);
    let baseline = sink.refresh_count;

    // Simulate 24 hours in 0.05h steps: one dawn and one dusk crossing
    for _ in 0..480 {
        sys.update(0.05, &mut sink);
    }

    assert_eq!(sink.refresh_count, baseline + 2);
}

#[test]
fn sun_and_moon_stay_complementary_through_a_day() {
    let mut sys = running_from(0.0, 1.0);
    let mut sink = CaptureSink::default();

    for _ in 0..960 {
        sys.update(0.025, &mut sink);
        let sun = sink.sun.expect("sun applied every tick");
        assert_ne!(
            sun.enabled, sink.moon_enabled,
            "sun/moon overlap at hour {}",
            sys.hour()
        );
    }
}

#[test]
fn daytime_matches_skybox_selection() {
    let mut sink = CaptureSink::default();
    for hour in [0.0, 3.0, 6.0, 9.0, 12.0, 15.0, 18.0, 21.0, 23.9] {
        let config = DayNightConfig {
            start_hour: hour,
            time_paused: true,
            ..Default::default()
        };
        let mut sys = DayNightSystem::with_preset(config, LightingPreset::default());
        sys.update(0.0, &mut sink);

        let expected = if (6.0..=18.0).contains(&hour) {
            Skybox::Day
        } else {
            Skybox::Night
        };
        assert_eq!(sink.skybox, Some(expected), "hour {hour}");
        assert_eq!(sys.is_daytime(), expected == Skybox::Day, "hour {hour}");
    }
}

#[test]
fn intensity_profile_over_a_day_matches_segments() {
    let mut sink = CaptureSink::default();
    // (hour, expected intensity)
    let expectations = [
        (0.0, 0.1),
        (3.0, 0.051),
        (6.0, 0.002),
        (7.5, 0.05),
        (15.0, 1.0),
        (16.0, 0.05),
        (20.0, 0.1),
    ];
    for (hour, expected) in expectations {
        let config = DayNightConfig {
            start_hour: hour,
            time_paused: true,
            ..Default::default()
        };
        let mut sys = DayNightSystem::with_preset(config, LightingPreset::default());
        sys.update(0.0, &mut sink);
        let sun = sink.sun.unwrap();
        assert!(
            (sun.intensity - expected).abs() < 1e-3,
            "hour {hour}: intensity {} != {expected}",
            sun.intensity
        );
    }
}
