//! Whole encode cycles through the public API.
//!
//! These tests drive the encoder the way a forwarding loop would: populate
//! a snapshot, flag the changes, encode every report group into one buffer
//! and check the emitted sentence stream.

use nmea0183::{
    DirtyMask, Encoder, EncoderConfig, FixMode, FixStatus, Satellite, SentenceBuffer,
    SessionState, Wind,
};

#[cfg(feature = "ais")]
use nmea0183::{AisChannel, AisVdmReport};

/// A snapshot with every report group carrying data.
fn full_snapshot() -> SessionState {
    let mut state = SessionState::new();
    state.fix.time = 1_689_440_730.0;
    state.fix.mode = FixMode::ThreeD;
    state.fix.status = FixStatus::Fix;
    state.fix.latitude = 44.123_45;
    state.fix.longitude = 9.543_21;
    state.fix.altitude = 2.0;
    state.fix.separation = 46.2;
    state.fix.satellites_used = 8;
    state.fix.pdop = 2.1;
    state.fix.hdop = 1.2;
    state.fix.vdop = 1.7;
    state.fix.epx = 1.1;
    state.fix.epy = 0.9;
    state.fix.epv = 2.1;
    state.fix.epe = 1.8;
    state.sky.satellites = vec![
        Satellite { prn: 2, elevation: 44, azimuth: 104, ss: 41.0, used: true },
        Satellite { prn: 5, elevation: 10, azimuth: 290, ss: 33.0, used: true },
        Satellite { prn: 7, elevation: 81, azimuth: 55, ss: 45.0, used: true },
        Satellite { prn: 13, elevation: 28, azimuth: 175, ss: 38.0, used: true },
        Satellite { prn: 20, elevation: 62, azimuth: 311, ss: 40.0, used: true },
        Satellite { prn: 25, elevation: 5, azimuth: 21, ss: 7.0, used: false },
    ];
    state.navigation.speed_thru_water = 5.1;
    state.navigation.speed_over_ground = 5.05;
    state.navigation.course_over_ground = 222.0;
    state.navigation.distance_total = 1234.5;
    state.navigation.distance_trip = 12.3;
    state.navigation.depth = 23.4;
    state.navigation.depth_offset = 0.7;
    state.navigation.heading_true = 181.0;
    state.navigation.heading_magnetic = 179.5;
    state.navigation.rate_of_turn = 0.25;
    state.navigation.xte = -185.2;
    state.navigation.rudder_angle = -4.5;
    state.environment.wind_apparent = Wind { angle: 33.7, speed: 5.5 };
    state.environment.variation = 2.5;
    state.environment.temp_water = 18.5;
    state
}

/// A mask flagging every group of the snapshot as changed.
fn everything_dirty() -> DirtyMask {
    let mut mask = DirtyMask::new();
    mask.time = true;
    mask.position = true;
    mask.mode = true;
    mask.dop = true;
    mask.used = true;
    mask.error_estimates = true;
    mask.satellites = true;
    mask.navigation.speed_thru_water = true;
    mask.navigation.speed_over_ground = true;
    mask.navigation.course_over_ground = true;
    mask.navigation.distance_total = true;
    mask.navigation.distance_trip = true;
    mask.navigation.depth = true;
    mask.navigation.heading_magnetic = true;
    mask.navigation.heading_true = true;
    mask.navigation.rate_of_turn = true;
    mask.navigation.xte = true;
    mask.navigation.rudder_angle = true;
    mask.environment.wind_apparent_angle = true;
    mask.environment.wind_apparent_speed = true;
    mask
}

/// Encode every report group of the snapshot into `out`, in stream order.
fn encode_all(encoder: &Encoder, state: &SessionState, mask: &DirtyMask, out: &mut SentenceBuffer) {
    encoder.encode_fix(state, mask, out).unwrap();
    encoder.encode_sky(state, mask, out).unwrap();
    encoder.encode_navigation(state, mask, out).unwrap();
    let count = encoder.encode_environment(state, mask, 0, out).unwrap();
    for num in 1..count {
        encoder.encode_environment(state, mask, num, out).unwrap();
    }
}

/// Recompute a sentence's checksum and compare it to the transmitted one.
fn checksum_is_valid(line: &str) -> bool {
    let star = match line.rfind('*') {
        Some(i) => i,
        None => return false,
    };
    let sum = line[1..star].bytes().fold(0u8, |acc, b| acc ^ b);
    line[star + 1..] == format!("{:02X}", sum)
}

#[test]
fn test_full_cycle_stream_order() {
    let state = full_snapshot();
    let mask = everything_dirty();
    let encoder = Encoder::new(EncoderConfig::default());
    let mut out = SentenceBuffer::new();
    encode_all(&encoder, &state, &mask, &mut out);

    let leaders: Vec<&str> = out.as_str().lines().map(|l| &l[..6]).collect();
    assert_eq!(
        leaders,
        vec![
            "$GPZDA", "$GPGGA", "$GPRMC", "$GPGSA", "$GPGBS", "$GPGSV", "$GPGSV",
            "$IIVHW", "$IIVTG", "$IIVLW", "$IIDPT", "$IIHDG", "$IIVHW", "$IIROT",
            "$IIXTE", "$IIRSA", "$IIVWR", "$IIMWV",
        ]
    );
}

#[test]
fn test_every_sentence_is_terminated_and_checksummed() {
    let state = full_snapshot();
    let mask = everything_dirty();
    let encoder = Encoder::new(EncoderConfig::default());
    let mut out = SentenceBuffer::new();
    encode_all(&encoder, &state, &mask, &mut out);

    assert!(out.as_str().ends_with("\r\n"));
    for line in out.as_str().lines() {
        assert!(line.starts_with('$') || line.starts_with('!'), "bad leader: {}", line);
        assert!(checksum_is_valid(line), "bad checksum: {}", line);
    }
}

#[test]
fn test_same_snapshot_encodes_identically() {
    let state = full_snapshot();
    let mask = everything_dirty();

    let first = Encoder::new(EncoderConfig::default());
    let mut a = SentenceBuffer::new();
    encode_all(&first, &state, &mask, &mut a);

    let second = Encoder::new(EncoderConfig::default());
    let mut b = SentenceBuffer::new();
    encode_all(&second, &state, &mask, &mut b);

    assert_eq!(a.as_str(), b.as_str());
    assert!(!a.is_empty());
}

#[test]
fn test_apparent_wind_reports_twice_with_same_speed() {
    let mut state = SessionState::new();
    state.environment.wind_apparent = Wind { angle: f64::NAN, speed: 5.5 };
    let mut mask = DirtyMask::new();
    mask.environment.wind_apparent_speed = true;

    let encoder = Encoder::new(EncoderConfig::default());
    let mut out = SentenceBuffer::new();
    let count = encoder.encode_environment(&state, &mask, 0, &mut out).unwrap();
    assert_eq!(count, 2);
    encoder.encode_environment(&state, &mask, 1, &mut out).unwrap();

    let lines: Vec<&str> = out.as_str().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("$IIVWR"));
    assert!(lines[1].starts_with("$IIMWV"));
    assert!(lines[0].contains(",5.50,N"));
    assert!(lines[1].contains(",5.50,N"));
}

#[test]
fn test_limited_buffer_keeps_whole_sentences() {
    let state = full_snapshot();
    let mask = everything_dirty();
    let encoder = Encoder::new(EncoderConfig::default());

    // Room for the ZDA sentence but not for the GGA that follows it.
    let mut out = SentenceBuffer::with_limit(48);
    let err = encoder.encode_fix(&state, &mask, &mut out).unwrap_err();
    match err {
        nmea0183::EncodeError::BufferFull { limit, needed } => {
            assert_eq!(limit, 48);
            assert!(needed > 48);
        }
    }

    assert_eq!(out.as_str().lines().count(), 1);
    assert!(out.as_str().starts_with("$GPZDA"));
    assert!(out.as_str().ends_with("\r\n"));

    // Draining the buffer makes room for a retry.
    out.clear();
    let mut unlimited = SentenceBuffer::new();
    encoder.encode_fix(&state, &mask, &mut unlimited).unwrap();
    assert!(unlimited.as_str().lines().count() > 1);
}

#[cfg(feature = "ais")]
#[test]
fn test_ais_fragment_train_reassembles() {
    let mut state = SessionState::new();
    let payload = "0123456789".repeat(13);
    state.ais = Some(AisVdmReport {
        message_type: 5,
        payload: payload.clone(),
        second_payload: None,
        channel: AisChannel::A,
    });
    let mut mask = DirtyMask::new();
    mask.ais = true;

    let mut encoder = Encoder::new(EncoderConfig::default());
    let mut out = SentenceBuffer::new();
    encoder.encode_ais(&state, &mask, &mut out).unwrap();

    let lines: Vec<&str> = out.as_str().lines().collect();
    assert_eq!(lines.len(), 3);
    let payloads: Vec<&str> = lines.iter().map(|l| l.split(',').nth(5).unwrap()).collect();
    assert_eq!(payloads[0].len(), 60);
    assert_eq!(payloads[1].len(), 60);
    assert_eq!(payloads[2].len(), 10);
    assert_eq!(payloads.concat(), payload);

    // Only the last fragment carries fill bits.
    let fills: Vec<&str> = lines
        .iter()
        .map(|l| l.split(',').nth(6).unwrap().split('*').next().unwrap())
        .collect();
    assert_eq!(fills, vec!["0", "0", "2"]);
    for line in lines {
        assert!(checksum_is_valid(line));
    }
}

#[cfg(feature = "ais")]
#[test]
fn test_ais_group_ids_rotate_only_for_fragmented_trains() {
    let mut state = SessionState::new();
    state.ais = Some(AisVdmReport {
        message_type: 5,
        payload: "0".repeat(130),
        second_payload: None,
        channel: AisChannel::A,
    });
    let mut mask = DirtyMask::new();
    mask.ais = true;

    let mut encoder = Encoder::new(EncoderConfig::default());
    let mut groups = Vec::new();
    for _ in 0..11 {
        let mut out = SentenceBuffer::new();
        encoder.encode_ais(&state, &mask, &mut out).unwrap();
        let first = out.as_str().lines().next().unwrap().to_string();
        groups.push(first.split(',').nth(3).unwrap().to_string());
    }
    let expected: Vec<String> = (0..11).map(|i| (i % 10).to_string()).collect();
    assert_eq!(groups, expected);

    // A message that fits one sentence has no group id and keeps the
    // counter where it is.
    state.ais = Some(AisVdmReport {
        message_type: 1,
        payload: "0".repeat(40),
        second_payload: None,
        channel: AisChannel::A,
    });
    let mut out = SentenceBuffer::new();
    encoder.encode_ais(&state, &mask, &mut out).unwrap();
    assert!(out.as_str().starts_with("!AIVDM,1,1,,A,"));

    state.ais = Some(AisVdmReport {
        message_type: 5,
        payload: "0".repeat(130),
        second_payload: None,
        channel: AisChannel::A,
    });
    let mut out = SentenceBuffer::new();
    encoder.encode_ais(&state, &mask, &mut out).unwrap();
    assert!(out.as_str().starts_with("!AIVDM,3,1,1,A,"));
}
