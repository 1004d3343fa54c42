use std::rc::Rc;

use futures::future::join_all;
use shared::{ApiError, DataStore, Slice, SliceUpdate};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::notify;

/// Reducer wrapper around the current snapshot.
///
/// Loaders dispatch their load result instead of setting state directly,
/// so a load that finishes late is applied on top of whatever the other
/// loaders already stored. A failed result leaves the snapshot as it was.
#[derive(Debug, Default, PartialEq)]
pub struct StoreState {
    pub snapshot: Rc<DataStore>,
}

impl Reducible for StoreState {
    type Action = Result<SliceUpdate, ApiError>;

    fn reduce(self: Rc<Self>, result: Self::Action) -> Rc<Self> {
        if result.is_err() {
            return self;
        }
        Rc::new(StoreState {
            snapshot: Rc::new(self.snapshot.after_load(result)),
        })
    }
}

/// Async loaders bound to the store. Cheap to clone into callbacks.
#[derive(Clone, PartialEq)]
pub struct Loader {
    api_client: ApiClient,
    dispatcher: UseReducerDispatcher<StoreState>,
}

impl Loader {
    /// Replace one slice with a fresh copy from the backend.
    /// On failure the slice keeps its old contents and the user is alerted.
    pub async fn load(&self, slice: Slice) {
        let result = self.api_client.load_slice(slice).await;
        match &result {
            Ok(update) if update.is_empty() => log::debug!("{:?} came back empty", update.slice()),
            Ok(update) => log::debug!("Loaded {} item(s) into {:?}", update.len(), update.slice()),
            Err(e) => notify::failure(slice.load_operation(), e),
        }
        self.dispatcher.dispatch(result);
    }

    /// All six slices at once; returns when every loader has finished
    pub async fn load_all(&self) {
        join_all(Slice::ALL.into_iter().map(|slice| self.load(slice))).await;
    }

    /// Reload `slices` one after another, in order
    pub async fn reload(&self, slices: &[Slice]) {
        for slice in slices {
            self.load(*slice).await;
        }
    }
}

pub struct UseDataStoreResult {
    pub snapshot: Rc<DataStore>,
    pub loader: Loader,
}

#[hook]
pub fn use_data_store(api_client: &ApiClient) -> UseDataStoreResult {
    let store = use_reducer(StoreState::default);

    let loader = Loader {
        api_client: api_client.clone(),
        dispatcher: store.dispatcher(),
    };

    UseDataStoreResult {
        snapshot: store.snapshot.clone(),
        loader,
    }
}
