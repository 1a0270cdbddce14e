#[cfg(test)]
mod tests {
    use zpump_core::codec::{
        compress, compress_default, decompress, CodecError, Direction, EngineStatus,
    };
    use zpump_core::constants::{DEFAULT_LEVEL, MAX_LEVEL, SCRATCH_CHUNK_SIZE};

    const DEMO_TEXT: &[u8] =
        b"This is test content just ignore this. hello hello hdd ndddgj hgg iiii hhh dsss";

    // --- Round-trip Tests ---

    #[test]
    fn deflate_inflate_roundtrip_demo_text() {
        let packed = compress(DEMO_TEXT, DEFAULT_LEVEL).expect("compression should succeed");
        assert!(
            packed.len() < DEMO_TEXT.len(),
            "82-byte demo text must shrink, got {} bytes",
            packed.len()
        );

        let restored = decompress(&packed).expect("decompression should succeed");
        assert_eq!(restored, DEMO_TEXT);
    }

    #[test]
    fn roundtrip_single_byte() {
        let packed = compress(b"a", DEFAULT_LEVEL).expect("compression should succeed");
        let restored = decompress(&packed).expect("decompression should succeed");
        assert_eq!(restored, b"a");
    }

    #[test]
    fn compress_empty_input_yields_valid_stream() {
        let packed = compress(b"", DEFAULT_LEVEL).expect("compression should succeed");
        assert!(!packed.is_empty(), "expected a header-only stream");

        let restored = decompress(&packed).expect("decompression should succeed");
        assert!(restored.is_empty());
    }

    #[test]
    fn roundtrip_every_level() {
        for level in 0..=MAX_LEVEL {
            let packed = compress(DEMO_TEXT, level)
                .unwrap_or_else(|e| panic!("level {} should be accepted: {}", level, e));
            let restored = decompress(&packed).expect("decompression should succeed");
            assert_eq!(restored, DEMO_TEXT, "level {} roundtrip mismatch", level);
        }
    }

    #[test]
    fn multi_chunk_output_is_not_truncated() {
        // 50k zeros inflate across several scratch-chunk pulls.
        let zeros = vec![0u8; 50_000];
        let packed = compress(&zeros, MAX_LEVEL).expect("compression should succeed");
        assert!(packed.len() < zeros.len());

        let restored = decompress(&packed).expect("decompression should succeed");
        assert!(restored.len() > SCRATCH_CHUNK_SIZE);
        assert_eq!(restored.len(), zeros.len(), "output must not be silently truncated");
        assert_eq!(restored, zeros);
    }

    // --- Determinism ---

    #[test]
    fn compress_is_deterministic() {
        let a = compress(DEMO_TEXT, DEFAULT_LEVEL).expect("compression should succeed");
        let b = compress(DEMO_TEXT, DEFAULT_LEVEL).expect("compression should succeed");
        assert_eq!(a, b);
    }

    #[test]
    fn compress_default_matches_best_level() {
        let explicit = compress(DEMO_TEXT, DEFAULT_LEVEL).expect("compression should succeed");
        let default = compress_default(DEMO_TEXT).expect("compression should succeed");
        assert_eq!(explicit, default);
    }

    #[test]
    fn redundant_input_shrinks_at_best_level() {
        let run = vec![b'z'; 4096];
        let packed = compress(&run, MAX_LEVEL).expect("compression should succeed");
        assert!(packed.len() < run.len());
    }

    // --- Error Paths ---

    #[test]
    fn decompress_empty_input_fails() {
        let err = decompress(b"").expect_err("empty input must be rejected");
        match err {
            CodecError::Engine { direction, status, .. } => {
                assert_eq!(direction, Direction::Inflate);
                assert_eq!(status, EngineStatus::BufError as i32);
            }
            other => panic!("expected engine error, got: {}", other),
        }
    }

    #[test]
    fn decompress_garbage_fails() {
        // 0xAA is not a valid stream header byte.
        let garbage = [0xAAu8; 64];
        let err = decompress(&garbage).expect_err("garbage input must be rejected");
        match err {
            CodecError::Engine { direction, .. } => assert_eq!(direction, Direction::Inflate),
            other => panic!("expected engine error, got: {}", other),
        }
    }

    #[test]
    fn decompress_truncated_stream_fails() {
        let zeros = vec![0u8; 50_000];
        let packed = compress(&zeros, MAX_LEVEL).expect("compression should succeed");

        let truncated = &packed[..packed.len() / 2];
        let err = decompress(truncated).expect_err("truncated stream must be rejected");
        match err {
            CodecError::Engine { direction, .. } => assert_eq!(direction, Direction::Inflate),
            other => panic!("expected engine error, got: {}", other),
        }
    }

    #[test]
    fn compress_rejects_out_of_range_level() {
        let err = compress(DEMO_TEXT, MAX_LEVEL + 1).expect_err("level 10 must be rejected");
        match err {
            CodecError::EngineInit { direction, .. } => assert_eq!(direction, Direction::Deflate),
            other => panic!("expected init error, got: {}", other),
        }
    }

    #[test]
    fn engine_error_display_names_status() {
        let err = decompress(b"").expect_err("empty input must be rejected");
        let rendered = err.to_string();
        assert!(rendered.contains("inflate"), "got: {}", rendered);
        assert!(rendered.contains("-5"), "got: {}", rendered);
    }
}
