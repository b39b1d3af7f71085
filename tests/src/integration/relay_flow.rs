//! # Relay Choreography Flows
//!
//! Exercises the full just-in-time path: players registered through the
//! operation entry point, a move intercepted at the hook, relays submitted
//! in registration order, nonces advanced only on acknowledgment.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aspect_runtime::{AspectConfig, AspectError, AspectHooks, HookEvent, RoyaleAspect};
    use ra_01_aspect_state::adapters::InMemoryStateStore;
    use ra_03_jit_relay::adapters::RecordingJitSubmitter;
    use ra_03_jit_relay::domain::abi::{encode_execute, encode_move};
    use ra_03_jit_relay::domain::entities::PreContractCallCtx;
    use ra_03_jit_relay::errors::RelayError;
    use shared_types::{Address, Bytes, TxHash, U256};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const GAME: [u8; 20] = [0xC0; 20];

    fn wired_aspect(
        submitter: RecordingJitSubmitter,
    ) -> (
        RoyaleAspect<InMemoryStateStore, RecordingJitSubmitter>,
        Arc<RecordingJitSubmitter>,
    ) {
        let submitter = Arc::new(submitter);
        let aspect = RoyaleAspect::new(
            Arc::new(InMemoryStateStore::new()),
            submitter.clone(),
            AspectConfig::default(),
        );
        (aspect, submitter)
    }

    fn register(aspect: &RoyaleAspect<InMemoryStateStore, RecordingJitSubmitter>, player: &Address) {
        let mut data = vec![0x00, 0x01];
        data.extend_from_slice(player.as_bytes());
        aspect.handle_operation(&data).unwrap();
    }

    fn nonce_of(
        aspect: &RoyaleAspect<InMemoryStateStore, RecordingJitSubmitter>,
        player: &Address,
    ) -> u64 {
        let mut data = vec![0x10, 0x02];
        data.extend_from_slice(player.as_bytes());
        String::from_utf8(aspect.handle_operation(&data).unwrap())
            .unwrap()
            .parse()
            .unwrap()
    }

    fn move_event(from: Address, tx_first_byte: u8) -> HookEvent {
        let mut hash = [0u8; 32];
        hash[0] = tx_first_byte;
        HookEvent::PreContractCall(PreContractCallCtx {
            from,
            to: Address::new(GAME),
            data: Bytes::from_vec(encode_move(3)),
            tx_hash: TxHash::new(hash),
        })
    }

    // =============================================================================
    // INTEGRATION TESTS: JIT RELAY
    // =============================================================================

    /// An outsider's move fans out to every registered player, in order.
    #[test]
    fn test_outsider_move_relays_to_all_players() {
        let (aspect, submitter) = wired_aspect(RecordingJitSubmitter::new());
        let players = [
            Address::new([0x01; 20]),
            Address::new([0x02; 20]),
            Address::new([0x03; 20]),
        ];
        for p in &players {
            register(&aspect, p);
        }

        aspect
            .dispatch(&move_event(Address::new([0xEE; 20]), 6))
            .unwrap();

        let senders: Vec<Address> = submitter.submitted().iter().map(|r| r.sender).collect();
        assert_eq!(senders, players);

        // direction = 6 % 4 = 2, wrapped in the wallet execute payload
        let expected = encode_execute(&Address::new(GAME), U256::zero(), &encode_move(2));
        for request in submitter.submitted() {
            assert_eq!(request.call_data.as_slice(), expected.as_slice());
        }
    }

    /// A registered player's own move never cascades.
    #[test]
    fn test_system_player_move_passes_through() {
        let (aspect, submitter) = wired_aspect(RecordingJitSubmitter::new());
        let sys = Address::new([0x01; 20]);
        register(&aspect, &sys);

        aspect.dispatch(&move_event(sys, 6)).unwrap();
        assert!(submitter.is_empty());
    }

    /// Repeated triggers produce the gapless 0,1,2,... nonce sequence.
    #[test]
    fn test_nonce_sequence_across_triggers() {
        let (aspect, _) = wired_aspect(RecordingJitSubmitter::new());
        let sys = Address::new([0x01; 20]);
        register(&aspect, &sys);
        let outsider = Address::new([0xEE; 20]);

        assert_eq!(nonce_of(&aspect, &sys), 0);
        for round in 1u64..=4 {
            aspect.dispatch(&move_event(outsider, 0)).unwrap();
            assert_eq!(nonce_of(&aspect, &sys), round);
        }
    }

    /// Submitted requests carry the nonce that was current at submission.
    #[test]
    fn test_requests_carry_read_nonce() {
        let (aspect, submitter) = wired_aspect(RecordingJitSubmitter::new());
        let sys = Address::new([0x01; 20]);
        register(&aspect, &sys);
        let outsider = Address::new([0xEE; 20]);

        for _ in 0..3 {
            aspect.dispatch(&move_event(outsider, 0)).unwrap();
        }
        let nonces: Vec<u64> = submitter.submitted().iter().map(|r| r.nonce).collect();
        assert_eq!(nonces, vec![0, 1, 2]);
    }

    /// A rejected submission fails the triggering call and stops the fan-out.
    #[test]
    fn test_failed_submission_aborts_trigger() {
        let rejected = Address::new([0x02; 20]);
        let (aspect, submitter) = wired_aspect(RecordingJitSubmitter::rejecting(rejected));
        let players = [Address::new([0x01; 20]), rejected, Address::new([0x03; 20])];
        for p in &players {
            register(&aspect, p);
        }

        let err = aspect
            .dispatch(&move_event(Address::new([0xEE; 20]), 0))
            .unwrap_err();
        assert!(matches!(
            err,
            AspectError::Relay(RelayError::SubmissionFailed { player, .. }) if player == rejected
        ));

        // First player submitted and advanced; the rejected one and everyone
        // after it stay untouched
        assert_eq!(submitter.len(), 1);
        assert_eq!(nonce_of(&aspect, &players[0]), 1);
        assert_eq!(nonce_of(&aspect, &players[1]), 0);
        assert_eq!(nonce_of(&aspect, &players[2]), 0);
    }

    /// Calls to other game methods are ignored entirely.
    #[test]
    fn test_non_move_calls_ignored() {
        let (aspect, submitter) = wired_aspect(RecordingJitSubmitter::new());
        register(&aspect, &Address::new([0x01; 20]));

        let event = HookEvent::PreContractCall(PreContractCallCtx {
            from: Address::new([0xEE; 20]),
            to: Address::new(GAME),
            data: Bytes::from_slice(&[0x12, 0x34, 0x56, 0x78, 0x00]),
            tx_hash: TxHash::ZERO,
        });
        aspect.dispatch(&event).unwrap();
        assert!(submitter.is_empty());
    }
}
