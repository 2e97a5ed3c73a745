use crate::SpaceParams;

/// Handle returned by [`SpaceStore::subscribe`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&SpaceParams)>;

/// Holds the params currently on display and tells subscribers when they
/// change.
///
/// A typical subscriber rebuilds the [`SceneDescription`](crate::SceneDescription)
/// and writes [`SpaceStore::query`] back to the address bar.
pub struct SpaceStore {
    params: SpaceParams,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl SpaceStore {
    pub fn new(params: SpaceParams) -> Self {
        Self {
            params,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn params(&self) -> &SpaceParams {
        &self.params
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SpaceParams) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Replaces the params. Listeners are called, in subscription order, only
    /// if the new params differ from the current ones.
    pub fn set(&mut self, params: SpaceParams) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;

        tracing::debug!(listeners = self.listeners.len(), "space params changed");
        let params = &self.params;
        for (_, listener) in self.listeners.iter_mut() {
            listener(params);
        }
        true
    }

    /// Edits a copy of the params and [`set`](Self::set)s it.
    pub fn update(&mut self, edit: impl FnOnce(&mut SpaceParams)) -> bool {
        let mut params = self.params.clone();
        edit(&mut params);
        self.set(params)
    }

    /// The query string for the current params.
    #[inline]
    pub fn query(&self) -> String {
        self.params.to_query()
    }
}

impl Default for SpaceStore {
    fn default() -> Self {
        Self::new(SpaceParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SpaceStore::default();
        let sink = seen.clone();
        store.subscribe(move |params| sink.borrow_mut().push(params.title.clone()));

        assert!(store.update(|p| p.title = "one".to_owned()));
        assert!(!store.update(|p| p.title = "one".to_owned()));
        assert!(store.update(|p| p.title = "two".to_owned()));

        assert_eq!(*seen.borrow(), vec!["one", "two"]);
        assert_eq!(store.query(), "title=two");
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = SpaceStore::default();
        let counter = calls.clone();
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.update(|p| p.location = vec![1.0, 2.0, 3.0]);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(|p| p.location = vec![4.0, 5.0, 6.0]);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.params().location, vec![4.0, 5.0, 6.0]);
    }
}
