// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Keeps the finished service collection of every connected peripheral.
use crate::api::Service;
use crate::collection::ServiceCollection;
use dashmap::DashMap;
use futures::stream::{Stream, StreamExt};
use log::{debug, trace};
use std::fmt::Debug;
use std::hash::Hash;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

/// Changes to a [`SessionCache`], keyed by peripheral id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent<Id> {
    /// Discovery finished and the peripheral's services are available.
    ServicesResolved(Id),
    /// The peripheral's services were discarded, usually because it disconnected.
    Invalidated(Id),
}

/// Per-peripheral store of discovered [`ServiceCollection`]s.
///
/// A collection is only valid for the connection it was discovered on. Call
/// [`invalidate`](SessionCache::invalidate) when the peripheral disconnects; the whole snapshot is
/// dropped and the next connection starts from an empty collection.
#[derive(Debug)]
pub struct SessionCache<Id, S>
where
    Id: Clone + Debug + Eq + Hash,
    S: Service,
{
    sessions: DashMap<Id, Arc<ServiceCollection<S>>>,
    events_channel: broadcast::Sender<CacheEvent<Id>>,
}

impl<Id, S> Default for SessionCache<Id, S>
where
    Id: Clone + Debug + Eq + Hash,
    S: Service,
{
    fn default() -> Self {
        let (broadcast_sender, _) = broadcast::channel(16);
        SessionCache {
            sessions: DashMap::new(),
            events_channel: broadcast_sender,
        }
    }
}

impl<Id, S> SessionCache<Id, S>
where
    Id: Clone + Debug + Eq + Hash + Send + Sync + 'static,
    S: Service,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, event: CacheEvent<Id>) {
        if let Err(lost) = self.events_channel.send(event) {
            trace!("Lost cache event, while nothing subscribed: {:?}", lost);
        }
    }

    /// Retrieve a stream of [`CacheEvent`]s emitted after this call.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = CacheEvent<Id>> + Send>> {
        let receiver = self.events_channel.subscribe();
        Box::pin(BroadcastStream::new(receiver).filter_map(|x| async move { x.ok() }))
    }

    /// Stores the services discovered on `id`, replacing those of an earlier session.
    pub fn insert(
        &self,
        id: Id,
        collection: ServiceCollection<S>,
    ) -> Arc<ServiceCollection<S>> {
        let collection = Arc::new(collection);
        if self
            .sessions
            .insert(id.clone(), collection.clone())
            .is_some()
        {
            debug!("Replaced services of {:?} from an earlier session", id);
        }
        self.emit(CacheEvent::ServicesResolved(id));
        collection
    }

    /// Drops everything known about `id`'s services. Returns the discarded collection, if any.
    pub fn invalidate(&self, id: &Id) -> Option<Arc<ServiceCollection<S>>> {
        let (id, collection) = self.sessions.remove(id)?;
        self.emit(CacheEvent::Invalidated(id));
        Some(collection)
    }

    pub fn get(&self, id: &Id) -> Option<Arc<ServiceCollection<S>>> {
        self.sessions.get(id).map(|val| val.value().clone())
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.sessions.contains_key(id)
    }

    /// Ids of all peripherals that currently have services cached.
    pub fn ids(&self) -> Vec<Id> {
        self.sessions.iter().map(|val| val.key().clone()).collect()
    }
}
