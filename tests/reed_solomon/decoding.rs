//! Decode pipeline: syndromes, locator, positions, magnitudes, verification

use rsfec::reed_solomon::berlekamp_massey::syndrome_polynomial;
use rsfec::{Galois8, Polynomial, ReedSolomon, RsError, TraceFailure, TraceOutcome};

/// Encode `message`, then overwrite bytes (indexed from the start of the codeword)
fn corrupted(rs: &ReedSolomon, message: &[u8], corruption: &[(usize, u8)]) -> Vec<u8> {
    let mut received = rs.encode(message).unwrap();
    for &(pos, value) in corruption {
        received[pos] = value;
    }
    received
}

// ============================================================================
// Fixed cases with five check symbols
// ============================================================================

#[test]
fn test_good_cases_decode_exactly() {
    let rs = ReedSolomon::new(5).unwrap();
    let cases: [(&[u8], &[(usize, u8)]); 4] = [
        (b"", &[]),
        (b" ", &[]),
        (b"hello world 1", &[]),
        (b"hello world 2", &[(5, 0x00), (14, 0x33)]),
    ];

    for (message, corruption) in cases {
        let received = corrupted(&rs, message, corruption);
        assert_eq!(rs.decode(&received).unwrap(), message, "message {:?}", message);
    }
}

#[test]
fn test_bad_cases_are_uncorrectable() {
    let rs = ReedSolomon::new(5).unwrap();
    let cases: [(&[u8], &[(usize, u8)]); 4] = [
        (b"", &[(0, 0x01), (3, 0x03), (4, 0x04)]),
        // more than t/2 but fewer than t errors
        (b"hello world 1", &[(5, 0x00), (14, 0x33), (16, 0x00)]),
        // exactly t errors
        (
            b"hello world 2",
            &[(0, 0x01), (5, 0x00), (9, 0x12), (14, 0x33), (16, 0x00)],
        ),
        // more than t errors
        (
            b"hello world 3",
            &[(0, 0x01), (1, 0x02), (5, 0x00), (9, 0x12), (14, 0x33), (16, 0x00)],
        ),
    ];

    for (message, corruption) in cases {
        let received = corrupted(&rs, message, corruption);
        assert_eq!(rs.decode(&received), Err(RsError::Uncorrectable), "message {:?}", message);
    }
}

// ============================================================================
// Individual stages
// ============================================================================

#[test]
fn test_syndromes_of_single_error() {
    let rs = ReedSolomon::new(6).unwrap();
    let codeword = rs.encode(b"syndromes").unwrap();
    let mut received = codeword.clone();
    // index 4 of a 15-symbol word is position 10
    received[4] ^= 0x5a;

    let syndromes = rs.syndromes(&received);
    for (j, s) in syndromes.iter().enumerate() {
        let expected = Galois8::new(0x5a) * Galois8::exp((j + 1) * 10);
        assert_eq!(*s, expected, "S_{}", j + 1);
    }

    let s = syndrome_polynomial(&syndromes);
    assert_eq!(s.coefficient(0), syndromes[0]);
    assert_eq!(s.coefficient(5), syndromes[5]);
}

#[test]
fn test_locator_and_positions_for_two_errors() {
    let rs = ReedSolomon::new(4).unwrap();
    let codeword = rs.encode(b"locate me").unwrap();
    let mut received = codeword.clone();
    let len = received.len();
    received[0] ^= 0x11;
    received[len - 1] ^= 0x22;

    let syndromes = rs.syndromes(&received);
    let locator = rs.error_locator(&syndromes).unwrap();
    assert_eq!(locator.degree(), Some(2));
    assert_eq!(locator.coefficient(0), Galois8::ONE);

    let positions = rs.error_positions(&locator);
    assert_eq!(positions, vec![0, len - 1]);
    assert!(rs.error_positions_valid(&positions, &locator, &received));

    // Λ(X⁻¹) = 0 for every error location X = α^position
    for &pos in &positions {
        assert!(locator.eval(Galois8::exp(255 - pos)).is_zero());
    }
}

#[test]
fn test_forney_magnitudes_match_injected_errors() {
    let rs = ReedSolomon::new(6).unwrap();
    let codeword = rs.encode(b"forney magnitudes").unwrap();
    let mut received = codeword.clone();
    received[2] ^= 0xc3;
    received[9] ^= 0x01;
    received[20] ^= 0x7e;

    let syndromes = rs.syndromes(&received);
    let locator = rs.error_locator(&syndromes).unwrap();
    let positions = rs.error_positions(&locator);
    assert_eq!(positions.len(), 3);

    let evaluator = rs.error_evaluator(&syndromes, &locator);
    assert!(evaluator.len() <= 6);

    let errors = rs
        .error_magnitude_polynomial(&syndromes, &locator, &positions, &received)
        .unwrap();
    assert_eq!(errors.len(), received.len());

    let expected: Vec<u8> = received.iter().zip(&codeword).map(|(r, c)| r ^ c).collect();
    assert_eq!(errors.to_bytes(), expected);
}

#[test]
fn test_errors_in_check_symbols_only() {
    let rs = ReedSolomon::new(6).unwrap();
    let codeword = rs.encode(b"payload").unwrap();
    let mut received = codeword.clone();
    let len = received.len();
    received[len - 2] ^= 0xff;
    received[len - 5] ^= 0x10;

    assert_eq!(rs.repair(&received).unwrap(), codeword);
    assert_eq!(rs.decode(&received).unwrap(), b"payload");
}

#[test]
fn test_full_length_word_corrects_capacity() {
    let rs = ReedSolomon::new(16).unwrap();
    let message: Vec<u8> = (0..239).map(|i| (i * 7 + 3) as u8).collect();
    let codeword = rs.encode(&message).unwrap();
    let mut received = codeword.clone();
    for (k, pos) in [0usize, 17, 64, 100, 128, 200, 238, 254].into_iter().enumerate() {
        received[pos] ^= 0x21 + k as u8;
    }

    assert_eq!(rs.decode(&received).unwrap(), message);
}

#[test]
fn test_repair_is_idempotent_on_codewords() {
    let rs = ReedSolomon::new(10).unwrap();
    let codeword = rs.encode(b"already fine").unwrap();
    assert_eq!(rs.repair(&codeword).unwrap(), codeword);
    assert_eq!(rs.repair(&rs.repair(&codeword).unwrap()).unwrap(), codeword);
}

#[test]
fn test_all_zero_word_with_check_symbols_only() {
    let rs = ReedSolomon::new(5).unwrap();
    let mut received = vec![0u8; 5];
    received[2] = 0x40;
    // a codeword made only of check symbols still corrects within capacity
    assert_eq!(rs.repair(&received).unwrap(), vec![0u8; 5]);
}

// ============================================================================
// Trace outcomes
// ============================================================================

#[test]
fn test_trace_reports_invalid_positions_for_overload() {
    let rs = ReedSolomon::new(5).unwrap();
    let received = corrupted(
        &rs,
        b"hello world 3",
        &[(0, 0x01), (1, 0x02), (5, 0x00), (9, 0x12), (14, 0x33), (16, 0x00)],
    );

    let trace = rs.trace(&received);
    assert!(trace.is_failure());
    assert!(trace.had_errors());
    assert!(trace.message().is_none());
    assert!(matches!(
        trace.outcome,
        TraceOutcome::Failed(
            TraceFailure::InvalidPositions
                | TraceFailure::Locator(_)
                | TraceFailure::Magnitude(_)
                | TraceFailure::VerificationFailed
        )
    ));
}

#[test]
fn test_trace_corrected_matches_repair() {
    let rs = ReedSolomon::new(8).unwrap();
    let received = corrupted(&rs, b"trace and repair", &[(3, 0), (11, 0xaa), (19, 0x5c)]);

    let trace = rs.trace(&received);
    let errors = match trace.outcome {
        TraceOutcome::Corrected { errors } => errors,
        ref other => panic!("unexpected outcome {:?}", other),
    };
    assert!((1..=3).contains(&errors));
    assert_eq!(trace.repaired().map(<[u8]>::to_vec), rs.repair(&received).ok());
    assert_eq!(trace.message(), Some(&b"trace and repair"[..]));
    assert!(trace.error_polynomial.as_ref().is_some_and(|e: &Polynomial| e.len() == received.len()));
}
