use crate::LoadState;

#[test]
fn from_ok_result_is_loaded() {
    let state = LoadState::from_result(Ok::<_, std::io::Error>("type Query { a: Int }"));

    assert_eq!(state.payload(), Some(&"type Query { a: Int }"));
    assert_eq!(state.error_message(), None);
    assert!(!state.is_loading());
}

#[test]
fn from_err_result_carries_message() {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "schema.graphql not found");
    let state = LoadState::<String>::from_result(Err(err));

    assert_eq!(state.error_message(), Some("schema.graphql not found"));
    assert_eq!(state.payload(), None);
}

#[test]
fn map_transforms_only_loaded_payloads() {
    let loaded = LoadState::Loaded("scalar Upload".to_string()).map(|text| text.len());
    let loading = LoadState::<String>::Loading.map(|text| text.len());
    let failed = LoadState::<String>::Failed("offline".to_string()).map(|text| text.len());

    assert_eq!(loaded, LoadState::Loaded(13));
    assert!(loading.is_loading());
    assert_eq!(failed, LoadState::Failed("offline".to_string()));
}

#[test]
fn into_payload_consumes_state() {
    assert_eq!(LoadState::Loaded(vec![1, 2]).into_payload(), Some(vec![1, 2]));
    assert_eq!(LoadState::<Vec<u8>>::Loading.into_payload(), None);
}
