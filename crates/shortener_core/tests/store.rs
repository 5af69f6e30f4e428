use std::sync::{Arc, Mutex};

use shortener_core::{AppState, AppViewModel, Effect, Msg, PageAddress, ShortenOutcome, Store};

fn new_store() -> Store {
    Store::new(AppState::new(
        PageAddress::parse("https://reduced.to/").unwrap(),
    ))
}

fn recorder(store: &mut Store) -> (Arc<Mutex<Vec<AppViewModel>>>, usize) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let id = store.subscribe(move |view| sink.lock().unwrap().push(view.clone()));
    (seen, id)
}

#[test]
fn subscribers_observe_loading_bracket() {
    let mut store = new_store();
    let (seen, _) = recorder(&mut store);

    store.dispatch(Msg::InputChanged("foo.com".into()));
    let effects = store.dispatch(Msg::SubmitClicked);
    let request_id = match effects.as_slice() {
        [Effect::RequestShorten { request_id, .. }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };
    store.dispatch(Msg::ShortenCompleted {
        request_id,
        outcome: ShortenOutcome::Shortened("foo.com".into()),
    });

    let loading: Vec<bool> = seen.lock().unwrap().iter().map(|v| v.loading).collect();
    assert_eq!(loading, vec![false, true, false]);
    assert!(!store.view().loading);
}

#[test]
fn unchanged_state_does_not_notify() {
    let mut store = new_store();
    let (seen, _) = recorder(&mut store);

    store.dispatch(Msg::EnterPressed);
    store.dispatch(Msg::OpenClicked);
    store.dispatch(Msg::CopyClicked);

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut store = new_store();
    let (seen, id) = recorder(&mut store);

    store.dispatch(Msg::InputChanged("a".into()));
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(Msg::InputChanged("ab".into()));

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(store.state().input_value(), "ab");
}
