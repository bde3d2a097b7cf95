//! Service layer: login, registration and announcements over one [`Store`].

mod announcements;
mod auth;
mod registration;

pub use announcements::*;
pub use auth::*;
pub use registration::*;

use crate::notify::{LocalNotifier, Mailer};
use crate::store::Store;

/// Everything the services need, owned in one place.
///
/// The HTTP layer keeps a single `Campus` behind a mutex; each service borrows from it for
/// the duration of one call.
pub struct Campus {
    store: Store,
    mailer: Box<dyn Mailer>,
    notifier: Box<dyn LocalNotifier>,
    policy: RegistrationPolicy,
}

impl Campus {
    pub fn new(
        store: Store,
        mailer: Box<dyn Mailer>,
        notifier: Box<dyn LocalNotifier>,
        policy: RegistrationPolicy,
    ) -> Self {
        Self {
            store,
            mailer,
            notifier,
            policy,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.store)
    }

    pub fn registration(&mut self) -> RegistrationService<'_> {
        RegistrationService::new(&mut self.store, self.mailer.as_ref(), self.policy)
    }

    pub fn announcements(&mut self) -> AnnouncementService<'_> {
        AnnouncementService::new(&mut self.store, self.notifier.as_ref())
    }
}
