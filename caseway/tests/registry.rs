//! Registry lifecycle tests: register, dispatch, unregister, clear.

use caseway::testing::{FailingCase, RecordingCase};
use caseway::{
    BoxError, CaseFn, CaseInput, CaseKey, CaseRegistry, CasewayError, DispatchError,
    DispatchOutcome,
};

#[tokio::test]
async fn test_dispatch_invokes_exactly_the_keyed_plugin() {
    let a = RecordingCase::new("A");
    let b = RecordingCase::new("B");
    let a_probe = a.clone();
    let b_probe = b.clone();

    let mut registry = CaseRegistry::new();
    registry.register(a).unwrap();
    registry.register(b).unwrap();

    let outcome = registry.dispatch("A", 7u32).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Invoked);
    assert_eq!(a_probe.invocations(), vec![7]);
    assert_eq!(b_probe.count(), 0, "no other plugin's action may run");
}

#[tokio::test]
async fn test_unknown_key_raises_not_registered() {
    let a = RecordingCase::new("A");
    let probe = a.clone();
    let mut registry = CaseRegistry::new();
    registry.register(a).unwrap();

    let err = registry.dispatch("B", 0u32).await.unwrap_err();

    assert!(matches!(err, DispatchError::NotRegistered(_)));
    assert_eq!(probe.count(), 0);
}

#[tokio::test]
async fn test_overwrite_last_registration_wins() {
    let first = RecordingCase::new("A");
    let second = RecordingCase::new("A");
    let first_probe = first.clone();
    let second_probe = second.clone();

    let mut registry = CaseRegistry::new();
    registry.register(first).unwrap();
    registry.register(second).unwrap();
    assert_eq!(registry.len(), 1);

    registry.dispatch("A", 0u32).await.unwrap();

    assert_eq!(first_probe.count(), 0);
    assert_eq!(second_probe.count(), 1);
}

#[tokio::test]
async fn test_clear_forgets_every_key() {
    let mut registry = CaseRegistry::new();
    registry.register(RecordingCase::new("A")).unwrap();
    registry.register(RecordingCase::new("B")).unwrap();

    registry.clear();

    assert!(registry.is_empty());
    for key in ["A", "B"] {
        let err = registry.dispatch(key, 0u32).await.unwrap_err();
        assert!(matches!(err, DispatchError::NotRegistered(_)));
    }
}

#[tokio::test]
async fn test_unregister_removes_exactly_that_key() {
    let b = RecordingCase::new("B");
    let b_probe = b.clone();

    let mut registry = CaseRegistry::new();
    registry.register(RecordingCase::new("A")).unwrap();
    registry.register(b).unwrap();

    assert!(registry.unregister(&CaseKey::single("A")).is_some());
    assert!(registry.unregister(&CaseKey::single("A")).is_none());

    let err = registry.dispatch("A", 0u32).await.unwrap_err();
    assert!(matches!(err, DispatchError::NotRegistered(_)));

    let outcome = registry.dispatch("B", 5u32).await.unwrap();
    assert_eq!(outcome, DispatchOutcome::Invoked);
    assert_eq!(b_probe.invocations(), vec![5]);
}

#[tokio::test]
async fn test_found_but_declined_is_a_silent_noop() {
    let a = RecordingCase::declining("A");
    let probe = a.clone();
    let mut registry = CaseRegistry::new();
    registry.register(a).unwrap();

    let outcome = registry.dispatch("A", 0u32).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Skipped);
    assert_eq!(probe.count(), 0);
}

#[tokio::test]
async fn test_action_failure_surfaces_to_the_caller() {
    let mut registry = CaseRegistry::new();
    registry.register(FailingCase::new("A", "boom")).unwrap();

    let err = registry.dispatch("A", ()).await.unwrap_err();

    match &err {
        DispatchError::Action(source) => assert_eq!(source.to_string(), "boom"),
        other => panic!("expected action error, got {other:?}"),
    }

    let top = CasewayError::from(err);
    assert!(matches!(top, CasewayError::Dispatch(_)));
}

#[tokio::test]
async fn test_empty_input_rejected_before_lookup() {
    // On an empty registry, the sentinel still reports InvalidInput, not
    // NotRegistered: validation precedes lookup.
    let registry: CaseRegistry<&'static str, u32> = CaseRegistry::new();
    let err = registry.dispatch("", 0u32).await.unwrap_err();
    assert!(matches!(err, DispatchError::InvalidInput));

    let mut registry = CaseRegistry::new();
    registry.register(RecordingCase::new("A")).unwrap();
    let err = registry.dispatch("", 0u32).await.unwrap_err();
    assert!(matches!(err, DispatchError::InvalidInput));
}

#[tokio::test]
async fn test_scenario_single_tag_equality_predicate() {
    let mut registry = CaseRegistry::new();
    registry
        .register(CaseFn::new(
            "A",
            |input: &CaseInput<&'static str>| input.tags() == ["A"],
            |_params: ()| async { Ok::<(), BoxError>(()) },
        ))
        .unwrap();

    let outcome = registry.dispatch("A", ()).await.unwrap();
    assert_eq!(outcome, DispatchOutcome::Invoked);

    let err = registry.dispatch("B", ()).await.unwrap_err();
    assert!(matches!(err, DispatchError::NotRegistered(_)));
}
