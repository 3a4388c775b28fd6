//! 스케줄 엔진 회귀 테스트. 기준 시나리오와 불변식(시간 단조성, 단위 왕복 등)을 확인한다.
use glass_kiln_toolbox::material_db::GlassFamily;
use glass_kiln_toolbox::schedule::{
    compute_schedule, Conservativeness, MoldDry, Overrides, ProcessMode, ScheduleError,
    ScheduleRequest, SegmentKind, ShapeFactor,
};
use glass_kiln_toolbox::units::UnitSystem;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn imperial(material: GlassFamily, thickness_in: f64, mode: ProcessMode) -> ScheduleRequest {
    ScheduleRequest::new(material, thickness_in, mode, UnitSystem::Imperial)
}

#[test]
fn bullseye_quarter_inch_anneal_only() {
    let res = compute_schedule(&imperial(GlassFamily::Bullseye90, 0.25, ProcessMode::AnnealOnly))
        .expect("schedule");
    let w = &res.waypoints;
    assert_eq!(w.len(), 5);

    // 취출 70°F → 서냉 900°F, 400°F/h
    assert_close("ramp end", w[1].time_h, 830.0 / 400.0, 1e-9);
    assert_eq!(w[1].temperature, 900.0);
    // 서냉 유지 0.5h
    assert_close("soak", w[2].time_h - w[1].time_h, 0.5, 1e-9);
    assert_eq!(w[2].kind, SegmentKind::Soaking);
    // Rate1 = 300°F/h
    assert_close("rate1", 200.0 / (w[3].time_h - w[2].time_h), 300.0, 1e-6);
    assert_eq!(w[3].temperature, 700.0);
    // Rate2 = 400°F/h (상한)
    assert_close("rate2", 630.0 / (w[4].time_h - w[3].time_h), 400.0, 1e-6);
    assert_eq!(w[4].temperature, 70.0);
}

#[test]
fn waypoints_start_at_unload_and_never_go_back_in_time() {
    let families = [
        GlassFamily::Bullseye90,
        GlassFamily::Oceanside96,
        GlassFamily::Uroboros90,
        GlassFamily::Float,
        GlassFamily::Borosilicate,
        GlassFamily::Custom,
    ];
    let shapes = [ShapeFactor::Flat, ShapeFactor::Uneven, ShapeFactor::Hollow];
    for family in families {
        for mode in ProcessMode::ALL {
            for shape in shapes {
                for (units, thickness, unload) in [
                    (UnitSystem::Imperial, 0.375, 70.0),
                    (UnitSystem::Metric, 1.9, (70.0 - 32.0) * 5.0 / 9.0),
                ] {
                    let req = ScheduleRequest::new(family, thickness, mode, units)
                        .with_shape(shape)
                        .with_indefinite_hold(mode == ProcessMode::TackFuse);
                    let res = compute_schedule(&req).expect("schedule");
                    let w = &res.waypoints;
                    assert_eq!(w[0].time_h, 0.0);
                    assert_close("start temp", w[0].temperature, unload, 1e-9);
                    assert_close("end temp", w[w.len() - 1].temperature, unload, 1e-9);
                    assert!(
                        w.windows(2).all(|p| p[1].time_h >= p[0].time_h),
                        "{family:?} {mode:?} {shape:?} not monotonic"
                    );
                    assert!(w.iter().all(|p| p.time_h.is_finite() && p.temperature.is_finite()));
                }
            }
        }
    }
}

#[test]
fn custom_glass_without_overrides_falls_back() {
    let res = compute_schedule(&imperial(GlassFamily::Custom, 0.25, ProcessMode::FullFuse))
        .expect("schedule");
    let by_label = |label: &str| {
        res.waypoints
            .iter()
            .find(|w| w.label.as_deref() == Some(label))
            .unwrap_or_else(|| panic!("missing {label}"))
    };
    assert_eq!(by_label("Anneal soak").temperature, 900.0);
    assert_eq!(by_label("Cool to strain point").temperature, 700.0);
    // 900 + 풀 퓨즈 오프셋 575
    assert_eq!(by_label("Process ramp").temperature, 1475.0);
}

#[test]
fn custom_glass_uses_supplied_temperatures() {
    let req = imperial(GlassFamily::Custom, 0.25, ProcessMode::AnnealOnly).with_overrides(
        Overrides {
            anneal_temperature: Some(960.0),
            strain_temperature: Some(780.0),
            ..Overrides::default()
        },
    );
    let res = compute_schedule(&req).expect("schedule");
    assert_eq!(res.waypoints[1].temperature, 960.0);
    assert_eq!(res.waypoints[3].temperature, 780.0);
}

#[test]
fn material_targets_and_offsets_drive_process_temperature() {
    let peak = |family, mode| {
        compute_schedule(&imperial(family, 0.25, mode))
            .expect("schedule")
            .peak_temperature()
    };
    assert_eq!(peak(GlassFamily::Bullseye90, ProcessMode::FullFuse), 1490.0);
    assert_eq!(peak(GlassFamily::Bullseye90, ProcessMode::Slump), 1225.0);
    // Oceanside는 캐스팅 온도가 없어 950 + 625
    assert_eq!(peak(GlassFamily::Oceanside96, ProcessMode::Cast), 1575.0);
    // 유도 온도는 공정 강도에 따라 증가한다
    let derived: Vec<f64> = [
        ProcessMode::Slump,
        ProcessMode::TackFuse,
        ProcessMode::FullFuse,
        ProcessMode::Cast,
    ]
    .into_iter()
    .map(|m| peak(GlassFamily::Custom, m))
    .collect();
    assert!(derived.windows(2).all(|p| p[1] > p[0]), "{derived:?}");
}

#[test]
fn default_holds_grow_with_mode_severity() {
    let hold = |mode| {
        let res = compute_schedule(&imperial(GlassFamily::Bullseye90, 0.25, mode)).expect("schedule");
        res.waypoints[2].time_h - res.waypoints[1].time_h
    };
    let holds: Vec<f64> = [
        ProcessMode::Slump,
        ProcessMode::TackFuse,
        ProcessMode::FullFuse,
        ProcessMode::Cast,
    ]
    .into_iter()
    .map(hold)
    .collect();
    assert!(holds.windows(2).all(|p| p[1] > p[0]), "{holds:?}");
    assert_close("cast hold", holds[3], 1.5, 1e-9);
}

#[test]
fn imperial_metric_round_trip_is_stable() {
    let original = imperial(GlassFamily::Bullseye90, 0.5, ProcessMode::FullFuse).with_overrides(
        Overrides {
            anneal_temperature: Some(910.0),
            strain_temperature: Some(710.0),
            process_temperature: Some(1480.0),
            process_hold_hours: Some(0.25),
            process_ramp_rate: Some(250.0),
        },
    );
    let metric = original.to_unit_system(UnitSystem::Metric);
    let back = metric.to_unit_system(UnitSystem::Imperial);

    let a = compute_schedule(&original).expect("imperial");
    let b = compute_schedule(&back).expect("round trip");
    let m = compute_schedule(&metric).expect("metric");
    assert_eq!(a.waypoints.len(), b.waypoints.len());
    assert_eq!(a.waypoints.len(), m.waypoints.len());
    for ((pa, pb), pm) in a.waypoints.iter().zip(&b.waypoints).zip(&m.waypoints) {
        assert!((pa.temperature.round() - pb.temperature.round()).abs() <= 1.0);
        assert_close("time", pb.time_h, pa.time_h, 1e-6);
        let metric_as_f = pm.temperature * 9.0 / 5.0 + 32.0;
        assert!((pa.temperature.round() - metric_as_f.round()).abs() <= 1.0);
        assert_close("metric time", pm.time_h, pa.time_h, 1e-6);
    }
}

#[test]
fn indefinite_hold_adds_no_time() {
    let base = imperial(GlassFamily::Bullseye90, 0.5, ProcessMode::FullFuse);
    let indefinite = compute_schedule(&base.clone().with_indefinite_hold(true)).expect("indefinite");
    let zero_hold = compute_schedule(&base.with_overrides(Overrides {
        process_hold_hours: Some(0.0),
        ..Overrides::default()
    }))
    .expect("zero hold");

    assert_close(
        "total",
        indefinite.total_hours(),
        zero_hold.total_hours(),
        1e-9,
    );
    assert!(indefinite.has_indefinite_hold());
    assert!(!zero_hold.has_indefinite_hold());
    let hold = &indefinite.waypoints[2];
    assert_eq!(hold.kind, SegmentKind::ProcessHoldIndefinite);
    assert_eq!(hold.time_h, indefinite.waypoints[1].time_h);
}

#[test]
fn cast_mold_dry_inserts_two_waypoints() {
    let base = imperial(GlassFamily::Bullseye90, 0.5, ProcessMode::Cast);
    let plain = compute_schedule(&base).expect("cast");
    let dried = compute_schedule(&base.clone().with_mold_dry(MoldDry {
        hours: 2.0,
        temperature: None,
    }))
    .expect("cast with dry");

    assert_eq!(dried.waypoints.len(), plain.waypoints.len() + 2);
    let reach = &dried.waypoints[1];
    let hold = &dried.waypoints[2];
    assert_eq!(reach.label.as_deref(), Some("Mold dry reach"));
    assert_eq!(reach.temperature, 200.0);
    assert_eq!(hold.label.as_deref(), Some("Mold dry hold"));
    assert_close("dry hold", hold.time_h - reach.time_h, 2.0, 1e-9);
    assert_eq!(dried.waypoints[3].kind, SegmentKind::ProcessRamp);
    // 승온 속도가 같으므로 차이는 건조 유지 시간뿐이다
    assert_close(
        "total",
        dried.total_hours() - plain.total_hours(),
        2.0,
        1e-9,
    );
}

#[test]
fn mold_dry_is_ignored_outside_cast_mode() {
    let req = imperial(GlassFamily::Bullseye90, 0.5, ProcessMode::FullFuse).with_mold_dry(MoldDry {
        hours: 2.0,
        temperature: Some(220.0),
    });
    let res = compute_schedule(&req).expect("schedule");
    assert_eq!(res.waypoints.len(), 7);
    assert!(res
        .waypoints
        .iter()
        .all(|w| w.label.as_deref() != Some("Mold dry hold")));
}

#[test]
fn conservativeness_orders_whole_schedule_duration() {
    let total = |level| {
        compute_schedule(
            &imperial(GlassFamily::Bullseye90, 1.0, ProcessMode::AnnealOnly)
                .with_conservativeness(level),
        )
        .expect("schedule")
        .total_hours()
    };
    let fast = total(Conservativeness::Fast);
    let standard = total(Conservativeness::Standard);
    let cautious = total(Conservativeness::Cautious);
    assert!(fast < standard && standard < cautious, "{fast} {standard} {cautious}");
}

#[test]
fn invalid_thickness_is_rejected() {
    for t in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        let err = compute_schedule(&imperial(GlassFamily::Bullseye90, t, ProcessMode::FullFuse))
            .expect_err("must fail");
        assert!(matches!(err, ScheduleError::InvalidThickness(_)), "{err:?}");
    }
}

#[test]
fn inconsistent_overrides_are_rejected() {
    let with = |overrides| {
        compute_schedule(
            &imperial(GlassFamily::Bullseye90, 0.25, ProcessMode::FullFuse).with_overrides(overrides),
        )
    };
    assert!(matches!(
        with(Overrides {
            strain_temperature: Some(950.0),
            ..Overrides::default()
        }),
        Err(ScheduleError::StrainNotBelowAnneal { .. })
    ));
    assert!(matches!(
        with(Overrides {
            process_temperature: Some(850.0),
            ..Overrides::default()
        }),
        Err(ScheduleError::ProcessNotAboveAnneal { .. })
    ));
    assert!(matches!(
        with(Overrides {
            process_ramp_rate: Some(0.0),
            ..Overrides::default()
        }),
        Err(ScheduleError::InvalidOverride {
            field: "process_ramp_rate",
            ..
        })
    ));
    assert!(matches!(
        with(Overrides {
            process_hold_hours: Some(-1.0),
            ..Overrides::default()
        }),
        Err(ScheduleError::InvalidOverride { .. })
    ));
}

#[test]
fn identical_requests_give_identical_results() {
    let req = imperial(GlassFamily::Float, 0.4, ProcessMode::Slump).with_shape(ShapeFactor::Uneven);
    assert_eq!(
        compute_schedule(&req).expect("first"),
        compute_schedule(&req).expect("second")
    );
}

#[test]
fn thickness_beyond_model_range_is_rejected() {
    let err = compute_schedule(&imperial(GlassFamily::Bullseye90, 1e160, ProcessMode::AnnealOnly))
        .expect_err("must fail");
    assert!(matches!(err, ScheduleError::ThicknessOutOfRange { .. }), "{err:?}");

    // 형상 배율이 곱해진 유효 두께로 판단한다: 15 in 중공 = 30 in
    let hollow = imperial(GlassFamily::Bullseye90, 15.0, ProcessMode::AnnealOnly)
        .with_shape(ShapeFactor::Hollow);
    assert!(matches!(
        compute_schedule(&hollow),
        Err(ScheduleError::ThicknessOutOfRange { .. })
    ));

    let thick = compute_schedule(&imperial(GlassFamily::Bullseye90, 20.0, ProcessMode::FullFuse))
        .expect("thick but in range");
    assert!(thick.waypoints.iter().all(|w| w.time_h.is_finite()));
}

#[test]
fn mold_dry_temperature_must_sit_between_unload_and_process() {
    let cast = |units, thickness, temperature| {
        compute_schedule(
            &ScheduleRequest::new(GlassFamily::Bullseye90, thickness, ProcessMode::Cast, units)
                .with_mold_dry(MoldDry {
                    hours: 1.0,
                    temperature: Some(temperature),
                }),
        )
    };
    for (units, thickness, temperature) in [
        (UnitSystem::Imperial, 0.5, 1700.0),
        (UnitSystem::Imperial, 0.5, 1525.0),
        (UnitSystem::Imperial, 0.5, 60.0),
        // 1525°F ≈ 829°C
        (UnitSystem::Metric, 1.27, 900.0),
        (UnitSystem::Metric, 1.27, 15.0),
    ] {
        let err = cast(units, thickness, temperature).expect_err("must fail");
        assert_eq!(
            err,
            ScheduleError::InvalidOverride {
                field: "mold_dry_temperature",
                value: temperature,
            }
        );
    }

    let ok = cast(UnitSystem::Metric, 1.27, 120.0).expect("120°C dry");
    let reach = &ok.waypoints[1];
    assert_eq!(reach.label.as_deref(), Some("Mold dry reach"));
    assert_close("dry temp", reach.temperature, 120.0, 1e-9);
    let ramp = &ok.waypoints[3];
    assert_eq!(ramp.kind, SegmentKind::ProcessRamp);
    assert!(ramp.temperature > reach.temperature);
}
