//! Single-flight bootstrap of the execution engine.
//!
//! The first [`RuntimeBootstrap::ensure_ready`] call creates one shared
//! load future; every later call clones it. Awaiters all observe the same
//! outcome, and a failed load is never retried.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::bridge::ExecutionBridge;
use crate::config::{BootstrapConfig, PackageSpec};
use crate::engine::EngineLoader;
use crate::error::BootstrapResult;
use crate::session::{RuntimeSession, SessionState};

/// Progress points reported to a bootstrap observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    LoadingEngine,
    InstallingPackage,
    Ready,
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadingEngine => write!(f, "loading engine"),
            Self::InstallingPackage => write!(f, "installing package"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// A loaded engine together with the installed package version.
pub struct Ready<E> {
    engine: Rc<E>,
    version: Rc<str>,
}

impl<E> Ready<E> {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// A bridge for issuing compiles.
    pub fn bridge(&self) -> ExecutionBridge<E> {
        ExecutionBridge::new(Rc::clone(&self.engine))
    }
}

impl<E> Clone for Ready<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Rc::clone(&self.engine),
            version: Rc::clone(&self.version),
        }
    }
}

impl<E> fmt::Debug for Ready<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ready")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// The shared outcome every `ensure_ready` caller awaits.
pub type ReadyFuture<E> = Shared<LocalBoxFuture<'static, BootstrapResult<Ready<E>>>>;

type Observer = Rc<dyn Fn(BootstrapPhase)>;

struct Inner<E> {
    session: RuntimeSession,
    load: Option<ReadyFuture<E>>,
}

/// Owner of the page's single [`RuntimeSession`].
pub struct RuntimeBootstrap<L: EngineLoader> {
    loader: Rc<L>,
    config: BootstrapConfig,
    observer: Option<Observer>,
    inner: Rc<RefCell<Inner<L::Engine>>>,
}

impl<L: EngineLoader + 'static> RuntimeBootstrap<L> {
    pub fn new(loader: L, config: BootstrapConfig) -> Self {
        Self {
            loader: Rc::new(loader),
            config,
            observer: None,
            inner: Rc::new(RefCell::new(Inner {
                session: RuntimeSession::new(),
                load: None,
            })),
        }
    }

    /// Report phase changes to `observer` (e.g. to drive a loading label).
    pub fn with_observer(mut self, observer: impl Fn(BootstrapPhase) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.inner.borrow().session.state()
    }

    /// The package version, once ready.
    pub fn version(&self) -> Option<String> {
        self.inner.borrow().session.version().map(str::to_string)
    }

    /// Start the load if nobody has yet, and return the shared outcome.
    ///
    /// Nothing runs until the returned future is first polled.
    pub fn ensure_ready(&self) -> ReadyFuture<L::Engine> {
        let mut inner = self.inner.borrow_mut();
        if let Some(load) = &inner.load {
            return load.clone();
        }

        inner.session.begin_loading();
        let load = Self::load(
            Rc::clone(&self.loader),
            self.config.package.clone(),
            self.observer.clone(),
            Rc::downgrade(&self.inner),
        )
        .boxed_local()
        .shared();
        inner.load = Some(load.clone());
        load
    }

    async fn load(
        loader: Rc<L>,
        package: PackageSpec,
        observer: Option<Observer>,
        inner: Weak<RefCell<Inner<L::Engine>>>,
    ) -> BootstrapResult<Ready<L::Engine>> {
        let notify = |phase: BootstrapPhase| {
            if let Some(observer) = &observer {
                observer(phase);
            }
        };

        let result = Self::install(&*loader, &package, &notify).await;

        if let Some(inner) = inner.upgrade() {
            let mut inner = inner.borrow_mut();
            match &result {
                Ok(ready) => {
                    inner.session.mark_ready(ready.version());
                }
                Err(err) => {
                    tracing::error!(error = %err, "runtime bootstrap failed");
                    inner.session.mark_failed();
                }
            }
        }

        if let Ok(ready) = &result {
            tracing::info!(version = ready.version(), "runtime ready");
            notify(BootstrapPhase::Ready);
        }
        result
    }

    async fn install(
        loader: &L,
        package: &PackageSpec,
        notify: &dyn Fn(BootstrapPhase),
    ) -> BootstrapResult<Ready<L::Engine>> {
        notify(BootstrapPhase::LoadingEngine);
        tracing::info!("loading execution engine");
        let engine = loader.load_engine().await?;

        notify(BootstrapPhase::InstallingPackage);
        tracing::info!(package = %package.name, "installing package");
        loader.install_package(&engine, package).await?;

        let version = loader.package_version(&engine, package)?;
        Ok(Ready {
            engine: Rc::new(engine),
            version: Rc::from(version),
        })
    }
}
