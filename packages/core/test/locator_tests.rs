use angular_core::di::{
    locate, InjectionToken, InjectorScope, Lookup, NullInjector, ServiceValue, StaticInjector,
};
use std::cell::Cell;

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: InjectionToken = InjectionToken::new("Greeting");

    fn greeting(value: &ServiceValue) -> Option<&'static str> {
        value.downcast_ref::<&'static str>().copied()
    }

    /// Scope that counts how often it was asked.
    struct CountingScope {
        inner: StaticInjector,
        lookups: Cell<usize>,
    }

    impl CountingScope {
        fn new(inner: StaticInjector) -> Self {
            CountingScope {
                inner,
                lookups: Cell::new(0),
            }
        }
    }

    impl InjectorScope for CountingScope {
        fn resolve(&self, token: &InjectionToken) -> Lookup {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.resolve(token)
        }
    }

    #[test]
    fn should_prefer_local_scope_over_module_scope() {
        let local = StaticInjector::new().provide(GREETING, "local");
        let module = CountingScope::new(StaticInjector::new().provide(GREETING, "module"));
        let value: ServiceValue =
            locate(&GREETING, &[&local, &module], || ServiceValue::of("default")).unwrap();
        assert_eq!(greeting(&value), Some("local"));
        assert_eq!(module.lookups.get(), 0);
    }

    #[test]
    fn should_fall_through_to_module_scope() {
        let module = StaticInjector::new().provide(GREETING, "module");
        let value: ServiceValue =
            locate(&GREETING, &[&NullInjector, &module], || ServiceValue::of("default")).unwrap();
        assert_eq!(greeting(&value), Some("module"));
    }

    #[test]
    fn should_invoke_fallback_exactly_once_when_every_scope_misses() {
        let local = CountingScope::new(StaticInjector::new());
        let module = CountingScope::new(StaticInjector::new());
        let calls = Cell::new(0);
        let value: ServiceValue = locate(&GREETING, &[&local, &module], || {
            calls.set(calls.get() + 1);
            ServiceValue::of("default")
        })
        .unwrap();
        assert_eq!(greeting(&value), Some("default"));
        assert_eq!(calls.get(), 1);
        assert_eq!(local.lookups.get(), 1);
        assert_eq!(module.lookups.get(), 1);
    }

    #[test]
    fn should_not_invoke_fallback_on_hit() {
        let module = StaticInjector::new().provide(GREETING, "module");
        let calls = Cell::new(0);
        let _: ServiceValue = locate(&GREETING, &[&NullInjector, &module], || {
            calls.set(calls.get() + 1);
            ServiceValue::Null
        })
        .unwrap();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn should_treat_null_registration_as_hit() {
        let local = StaticInjector::new().provide_null(GREETING);
        let module = StaticInjector::new().provide(GREETING, "module");
        let value: ServiceValue =
            locate(&GREETING, &[&local, &module], || ServiceValue::of("default")).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn should_accept_lookup_functions_as_scopes() {
        let local = |_: &InjectionToken| Lookup::NotFound;
        let module = |token: &InjectionToken| {
            if *token == GREETING {
                Lookup::Found(ServiceValue::of("closure"))
            } else {
                Lookup::NotFound
            }
        };
        let value: ServiceValue =
            locate(&GREETING, &[&local, &module], || ServiceValue::Null).unwrap();
        assert_eq!(greeting(&value), Some("closure"));
    }
}
