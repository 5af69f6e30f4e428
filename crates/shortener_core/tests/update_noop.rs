use shortener_core::{update, AppState, Msg, PageAddress};

fn new_state() -> AppState {
    AppState::new(PageAddress::parse("https://reduced.to/").unwrap())
}

#[test]
fn result_actions_without_result_leave_state_untouched() {
    for msg in [Msg::CopyClicked, Msg::OpenClicked, Msg::EnterPressed] {
        let state = new_state();
        let (next, effects) = update(state.clone(), msg.clone());

        assert_eq!(state, next, "msg {msg:?}");
        assert!(effects.is_empty());
    }
}

#[test]
fn view_does_not_depend_on_change_tracking() {
    let (mut state, _) = update(new_state(), Msg::InputChanged("foo.com".into()));
    let before = state.view();

    assert!(state.consume_dirty());
    assert_eq!(state.view(), before);
}
