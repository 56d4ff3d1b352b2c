#[cfg(test)]
mod test {
    use crate::config::EmulatorOptions;
    use crate::error::{HostError, LaunchError, TransferError};
    use crate::gate::{GateMode, LaunchEvent, PhaseKind, PlaybackGate};
    use crate::geometry::Bounds;
    use crate::host::{Emulator, Host, PlaybackControl};
    use crate::rom::RomBytes;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Record {
        constructed: usize,
        inserted: Vec<Vec<u8>>,
        controls_created: usize,
        control_bounds: Vec<Bounds>,
        control_hidden: bool,
        options_seen: Vec<EmulatorOptions>,
    }

    struct MockEmulator {
        record: Rc<RefCell<Record>>,
        fail_insert: bool,
    }

    impl Emulator for MockEmulator {
        fn insert(&mut self, rom: RomBytes) -> Result<(), HostError> {
            if self.fail_insert {
                return Err(HostError::Emulator("bad cartridge".into()));
            }
            self.record.borrow_mut().inserted.push(rom.to_vec());
            Ok(())
        }
    }

    struct MockControl {
        record: Rc<RefCell<Record>>,
        fail_set_bounds: bool,
    }

    impl PlaybackControl for MockControl {
        fn set_bounds(&mut self, bounds: Bounds) -> Result<(), HostError> {
            if self.fail_set_bounds {
                return Err(HostError::Dom("style".into()));
            }
            self.record.borrow_mut().control_bounds.push(bounds);
            Ok(())
        }

        fn hide(&mut self) -> Result<(), HostError> {
            self.record.borrow_mut().control_hidden = true;
            Ok(())
        }
    }

    struct MockHost {
        record: Rc<RefCell<Record>>,
        surface: Rc<Cell<Bounds>>,
        fail_construct: bool,
        fail_insert: bool,
        fail_set_bounds: bool,
    }

    impl Host for MockHost {
        type Emulator = MockEmulator;
        type Control = MockControl;

        fn surface_bounds(&self) -> Bounds {
            self.surface.get()
        }

        fn construct_emulator(
            &mut self,
            options: &EmulatorOptions,
        ) -> Result<MockEmulator, HostError> {
            if self.fail_construct {
                return Err(HostError::Emulator("no canvas".into()));
            }
            let mut record = self.record.borrow_mut();
            record.constructed += 1;
            record.options_seen.push(options.clone());
            Ok(MockEmulator {
                record: self.record.clone(),
                fail_insert: self.fail_insert,
            })
        }

        fn create_control(&mut self) -> Result<MockControl, HostError> {
            self.record.borrow_mut().controls_created += 1;
            Ok(MockControl {
                record: self.record.clone(),
                fail_set_bounds: self.fail_set_bounds,
            })
        }
    }

    const SURFACE: Bounds = Bounds::new(8.0, 16.0, 512.0, 480.0);

    struct Fixture {
        gate: PlaybackGate<MockHost>,
        record: Rc<RefCell<Record>>,
        surface: Rc<Cell<Bounds>>,
    }

    fn init_gate(mode: GateMode) -> Fixture {
        init_gate_with(mode, |_| {})
    }

    fn init_gate_with(mode: GateMode, tweak: impl FnOnce(&mut MockHost)) -> Fixture {
        let _ = env_logger::builder().is_test(true).try_init();

        let record = Rc::new(RefCell::new(Record::default()));
        let surface = Rc::new(Cell::new(SURFACE));
        let mut host = MockHost {
            record: record.clone(),
            surface: surface.clone(),
            fail_construct: false,
            fail_insert: false,
            fail_set_bounds: false,
        };
        tweak(&mut host);
        Fixture {
            gate: PlaybackGate::new(mode, host, EmulatorOptions::default()),
            record,
            surface,
        }
    }

    fn rom(len: usize) -> RomBytes {
        RomBytes::from((0..len).map(|i| (i % 251) as u8).collect::<Vec<u8>>())
    }

    fn network_error() -> LaunchEvent {
        LaunchEvent::Transferred(Err(TransferError::Network("offline".into())))
    }

    #[test]
    fn ungated_inserts_immediately_without_control() {
        let mut f = init_gate(GateMode::Ungated);
        let data = rom(40);

        f.gate.handle(LaunchEvent::Transferred(Ok(data.clone()))).unwrap();

        let record = f.record.borrow();
        assert_eq!(record.constructed, 1);
        assert_eq!(record.inserted, vec![data.to_vec()]);
        assert_eq!(record.controls_created, 0);
        assert!(record.control_bounds.is_empty());
        assert_eq!(f.gate.phase(), PhaseKind::Running);
        assert!(!f.gate.control_visible());
    }

    #[test]
    fn gated_waits_for_activation() {
        let mut f = init_gate(GateMode::Gated);
        let data = rom(1024);

        f.gate.handle(LaunchEvent::Transferred(Ok(data.clone()))).unwrap();
        {
            let record = f.record.borrow();
            assert_eq!(record.constructed, 1);
            assert_eq!(record.controls_created, 1);
            assert!(record.inserted.is_empty());
            assert_eq!(record.control_bounds, vec![SURFACE]);
        }
        assert_eq!(f.gate.phase(), PhaseKind::AwaitingGesture);
        assert!(f.gate.control_visible());
        assert!(f.gate.emulator().is_some());

        f.gate.handle(LaunchEvent::Activated).unwrap();

        let record = f.record.borrow();
        assert!(record.control_hidden);
        assert_eq!(record.inserted, vec![data.to_vec()]);
        assert_eq!(f.gate.phase(), PhaseKind::Running);
        assert!(!f.gate.control_visible());
    }

    #[test]
    fn transfer_failure_never_constructs() {
        for mode in [GateMode::Ungated, GateMode::Gated] {
            let mut f = init_gate(mode);

            let err = f.gate.handle(network_error()).unwrap_err();
            assert!(matches!(err, LaunchError::Transfer(TransferError::Network(_))));

            // A stalled gate ignores whatever arrives afterwards.
            f.gate.handle(LaunchEvent::Activated).unwrap();
            f.gate.handle(LaunchEvent::LayoutChanged).unwrap();

            let record = f.record.borrow();
            assert_eq!(record.constructed, 0, "{mode:?}");
            assert_eq!(record.controls_created, 0, "{mode:?}");
            assert!(record.inserted.is_empty(), "{mode:?}");
            assert_eq!(f.gate.phase(), PhaseKind::Stalled);
        }
    }

    #[test]
    fn double_activation_inserts_once() {
        let mut f = init_gate(GateMode::Gated);
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(64)))).unwrap();

        f.gate.handle(LaunchEvent::Activated).unwrap();
        f.gate.handle(LaunchEvent::Activated).unwrap();

        assert_eq!(f.record.borrow().inserted.len(), 1);
        assert!(!f.gate.control_visible());
    }

    #[test]
    fn resize_tracks_surface_once_per_event() {
        let mut f = init_gate(GateMode::Gated);
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(16)))).unwrap();

        let resized = [
            Bounds::new(0.0, 0.0, 640.0, 600.0),
            Bounds::new(4.0, 2.0, 320.0, 300.0),
        ];
        for bounds in resized {
            f.surface.set(bounds);
            f.gate.handle(LaunchEvent::LayoutChanged).unwrap();
            assert_eq!(f.record.borrow().control_bounds.last(), Some(&bounds));
        }

        assert_eq!(
            f.record.borrow().control_bounds,
            vec![SURFACE, resized[0], resized[1]]
        );
        assert!(f.record.borrow().inserted.is_empty());
    }

    #[test]
    fn resize_after_activation_is_ignored() {
        let mut f = init_gate(GateMode::Gated);
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(16)))).unwrap();
        f.gate.handle(LaunchEvent::Activated).unwrap();

        f.surface.set(Bounds::new(0.0, 0.0, 100.0, 100.0));
        f.gate.handle(LaunchEvent::LayoutChanged).unwrap();

        assert_eq!(f.record.borrow().control_bounds, vec![SURFACE]);
    }

    #[test]
    fn activation_before_transfer_is_a_no_op() {
        let mut f = init_gate(GateMode::Gated);
        f.gate.handle(LaunchEvent::Activated).unwrap();
        f.gate.handle(LaunchEvent::LayoutChanged).unwrap();
        assert_eq!(f.gate.phase(), PhaseKind::AwaitingTransfer);

        f.gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap();
        assert_eq!(f.gate.phase(), PhaseKind::AwaitingGesture);
        assert!(f.record.borrow().inserted.is_empty());
    }

    #[test]
    fn second_transfer_is_ignored() {
        let mut f = init_gate(GateMode::Ungated);
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap();
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(9)))).unwrap();

        let record = f.record.borrow();
        assert_eq!(record.constructed, 1);
        assert_eq!(record.inserted.len(), 1);
        assert_eq!(record.inserted[0].len(), 8);
    }

    #[test]
    fn options_reach_the_constructor() {
        let _ = env_logger::builder().is_test(true).try_init();
        let record = Rc::new(RefCell::new(Record::default()));
        let host = MockHost {
            record: record.clone(),
            surface: Rc::new(Cell::new(SURFACE)),
            fail_construct: false,
            fail_insert: false,
            fail_set_bounds: false,
        };
        let options = EmulatorOptions {
            locale: Some("fr".into()),
            fps: Some(50.0),
        };
        let mut gate = PlaybackGate::new(GateMode::Ungated, host, options.clone());

        gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap();
        assert_eq!(record.borrow().options_seen, vec![options]);
    }

    #[test]
    fn construct_failure_stalls_without_control() {
        let mut f = init_gate_with(GateMode::Gated, |host| host.fail_construct = true);

        let err = f.gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap_err();
        assert!(matches!(err, LaunchError::Host(HostError::Emulator(_))));
        assert_eq!(f.gate.phase(), PhaseKind::Stalled);
        assert_eq!(f.record.borrow().controls_created, 0);
    }

    #[test]
    fn rejected_insert_leaves_gate_stalled() {
        let mut f = init_gate_with(GateMode::Gated, |host| host.fail_insert = true);
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap();

        let err = f.gate.handle(LaunchEvent::Activated).unwrap_err();
        assert!(matches!(err, LaunchError::Host(_)));
        assert_eq!(f.gate.phase(), PhaseKind::Stalled);
        assert!(f.record.borrow().control_hidden);

        // No second attempt on a later click.
        f.gate.handle(LaunchEvent::Activated).unwrap();
        assert!(f.record.borrow().inserted.is_empty());
    }

    #[test]
    fn failed_initial_layout_hides_control() {
        let mut f = init_gate_with(GateMode::Gated, |host| host.fail_set_bounds = true);

        let err = f.gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap_err();
        assert_eq!(err, LaunchError::Host(HostError::Dom("style".into())));
        assert_eq!(f.gate.phase(), PhaseKind::Stalled);
        assert!(f.record.borrow().control_hidden);
        assert!(!f.gate.control_visible());

        f.gate.handle(LaunchEvent::Activated).unwrap();
        assert!(f.record.borrow().inserted.is_empty());
    }

    #[test]
    fn dismissed_control_is_hidden_but_activation_still_starts() {
        let mut f = init_gate(GateMode::Gated);
        let data = rom(32);
        f.gate.handle(LaunchEvent::Transferred(Ok(data.clone()))).unwrap();

        f.gate.dismiss_control();
        assert!(f.record.borrow().control_hidden);
        assert!(!f.gate.control_visible());
        assert_eq!(f.gate.phase(), PhaseKind::AwaitingGesture);

        f.surface.set(Bounds::new(0.0, 0.0, 100.0, 100.0));
        f.gate.handle(LaunchEvent::LayoutChanged).unwrap();
        assert_eq!(f.record.borrow().control_bounds, vec![SURFACE]);

        f.gate.handle(LaunchEvent::Activated).unwrap();
        assert_eq!(f.record.borrow().inserted, vec![data.to_vec()]);
        assert_eq!(f.gate.phase(), PhaseKind::Running);
    }

    #[test]
    fn dismiss_without_control_is_a_no_op() {
        let mut f = init_gate(GateMode::Ungated);
        f.gate.dismiss_control();
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap();
        f.gate.dismiss_control();

        assert!(!f.record.borrow().control_hidden);
        assert_eq!(f.gate.phase(), PhaseKind::Running);
    }

    #[test]
    fn zero_sized_surface_is_still_tracked() {
        let mut f = init_gate(GateMode::Gated);
        f.gate.handle(LaunchEvent::Transferred(Ok(rom(8)))).unwrap();

        f.surface.set(Bounds::default());
        f.gate.handle(LaunchEvent::LayoutChanged).unwrap();
        assert_eq!(f.record.borrow().control_bounds.last(), Some(&Bounds::default()));
    }

    #[test]
    fn phase_names() {
        assert_eq!(PhaseKind::AwaitingGesture.to_string(), "awaiting-gesture");
        assert_eq!(PhaseKind::Stalled.as_str(), "stalled");
    }
}
