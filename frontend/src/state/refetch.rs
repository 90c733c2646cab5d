use leptos::*;

/// Explicit "data changed, reload" event. Views subscribe by reading
/// `track` inside an effect; mutations call `notify`.
#[derive(Clone, Copy)]
pub struct RefetchBus {
    tick: RwSignal<u64>,
}

impl RefetchBus {
    pub fn new() -> Self {
        Self {
            tick: create_rw_signal(0),
        }
    }

    pub fn notify(&self) {
        self.tick.update(|tick| *tick = tick.wrapping_add(1));
    }

    pub fn track(&self) -> u64 {
        self.tick.get()
    }

    pub fn current(&self) -> u64 {
        self.tick.get_untracked()
    }
}

impl Default for RefetchBus {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_refetch_bus() -> RefetchBus {
    let bus = RefetchBus::new();
    provide_context(bus);
    bus
}

pub fn use_refetch_bus() -> RefetchBus {
    use_context::<RefetchBus>().unwrap_or_else(provide_refetch_bus)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notify_increments_counter() {
        with_runtime(|| {
            let bus = provide_refetch_bus();
            assert_eq!(bus.current(), 0);
            use_refetch_bus().notify();
            bus.notify();
            assert_eq!(bus.current(), 2);
        });
    }
}
