use crate::{update, AppState, AppViewModel, Effect, Msg};

pub type SubscriptionId = usize;

type Subscriber = Box<dyn FnMut(&AppViewModel) + Send>;

/// Observable container for [`AppState`].
///
/// Every message goes through [`update`]; subscribers receive a fresh view
/// whenever a message changed visible state.
pub struct Store {
    state: AppState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&AppViewModel) + Send + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Applies `msg` and returns the effects the caller must execute.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let (mut next, effects) = update(self.state.clone(), msg);
        let changed = next.consume_dirty();
        self.state = next;
        if changed {
            self.notify();
        }
        effects
    }

    fn notify(&mut self) {
        let view = self.state.view();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&view);
        }
    }
}
