//! # Operation Entry-Point Flows
//!
//! Drives the wired aspect through its `opcode || params` surface and
//! checks the documented wire contract: registry growth, read-only
//! queries, and the fatal rejection paths.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aspect_runtime::{AspectConfig, AspectError, RoyaleAspect};
    use ra_01_aspect_state::adapters::InMemoryStateStore;
    use ra_02_operations::errors::OperationError;
    use ra_03_jit_relay::adapters::RecordingJitSubmitter;
    use rand::Rng;
    use shared_types::Address;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PLAYER_A: &str = "e2f8857467b61f2e4b1a614a0d560cd75c0c076f";
    const PLAYER_B: &str = "640fa8872cf086e9ab181ce6d7801284e20bc4d7";

    fn wired_aspect() -> RoyaleAspect<InMemoryStateStore, RecordingJitSubmitter> {
        RoyaleAspect::new(
            Arc::new(InMemoryStateStore::new()),
            Arc::new(RecordingJitSubmitter::new()),
            AspectConfig::default(),
        )
    }

    fn register(player: &Address) -> Vec<u8> {
        let mut data = vec![0x00, 0x01];
        data.extend_from_slice(player.as_bytes());
        data
    }

    fn query_players() -> Vec<u8> {
        vec![0x10, 0x01]
    }

    fn query_nonce(player: &Address) -> Vec<u8> {
        let mut data = vec![0x10, 0x02];
        data.extend_from_slice(player.as_bytes());
        data
    }

    // =============================================================================
    // INTEGRATION TESTS: OPERATION DISPATCH
    // =============================================================================

    /// The documented two-player example: count prefix plus ordered entries.
    #[test]
    fn test_concrete_registration_blob() {
        let aspect = wired_aspect();
        let a = Address::from_hex(PLAYER_A).unwrap();
        let b = Address::from_hex(PLAYER_B).unwrap();

        assert!(aspect.handle_operation(&register(&a)).unwrap().is_empty());
        assert!(aspect.handle_operation(&register(&b)).unwrap().is_empty());

        let blob = String::from_utf8(aspect.handle_operation(&query_players()).unwrap()).unwrap();
        assert_eq!(blob, format!("0002{PLAYER_A}{PLAYER_B}"));
    }

    /// Uppercase registrations normalize to lowercase canonical entries.
    #[test]
    fn test_entries_are_lowercased() {
        let aspect = wired_aspect();
        let addr = Address::from_hex(&PLAYER_A.to_uppercase()).unwrap();
        aspect.handle_operation(&register(&addr)).unwrap();

        let blob = String::from_utf8(aspect.handle_operation(&query_players()).unwrap()).unwrap();
        assert_eq!(blob, format!("0001{PLAYER_A}"));
    }

    /// Registering a batch of random players preserves insertion order.
    #[test]
    fn test_bulk_registration_round_trip() {
        let aspect = wired_aspect();
        let mut rng = rand::thread_rng();
        let players: Vec<Address> = (0..50).map(|_| Address::new(rng.gen())).collect();

        for player in &players {
            aspect.handle_operation(&register(player)).unwrap();
        }

        let blob = String::from_utf8(aspect.handle_operation(&query_players()).unwrap()).unwrap();
        let mut expected = format!("{:04x}", players.len());
        for player in &players {
            expected.push_str(&player.to_hex());
        }
        assert_eq!(blob, expected);
    }

    /// Read opcodes return identical results with no intervening writes.
    #[test]
    fn test_read_opcodes_idempotent() {
        let aspect = wired_aspect();
        let a = Address::from_hex(PLAYER_A).unwrap();
        aspect.handle_operation(&register(&a)).unwrap();

        assert_eq!(
            aspect.handle_operation(&query_players()).unwrap(),
            aspect.handle_operation(&query_players()).unwrap()
        );
        assert_eq!(
            aspect.handle_operation(&query_nonce(&a)).unwrap(),
            aspect.handle_operation(&query_nonce(&a)).unwrap()
        );
        assert_eq!(aspect.handle_operation(&query_nonce(&a)).unwrap(), b"0");
    }

    /// Opcode 0xFFFF fails with UnknownOperation and mutates nothing.
    #[test]
    fn test_unknown_opcode_rejected() {
        let aspect = wired_aspect();
        let err = aspect.handle_operation(&[0xFF, 0xFF]).unwrap_err();
        assert_eq!(
            err,
            AspectError::Operation(OperationError::UnknownOperation(0xFFFF))
        );
        assert!(aspect
            .handle_operation(&query_players())
            .unwrap()
            .is_empty());
    }

    /// 19- and 21-byte register params fail and leave the blob unchanged.
    #[test]
    fn test_malformed_params_rejected() {
        let aspect = wired_aspect();
        let a = Address::from_hex(PLAYER_A).unwrap();
        aspect.handle_operation(&register(&a)).unwrap();
        let before = aspect.handle_operation(&query_players()).unwrap();

        for wrong_len in [19usize, 21] {
            let mut data = vec![0x00, 0x01];
            data.extend(std::iter::repeat(0xAB).take(wrong_len));
            let err = aspect.handle_operation(&data).unwrap_err();
            assert!(matches!(
                err,
                AspectError::Operation(OperationError::InvalidParams { .. })
            ));
        }

        assert_eq!(aspect.handle_operation(&query_players()).unwrap(), before);
    }
}
