//! Multiplayer collaborators.
//!
//! The evaluator does not simulate a network. Scripts that ask whether they
//! run on a server, or that broadcast variables, talk to an attached
//! [`Client`] and the [`Simulation`] it belongs to. Both are traits so that
//! hosts and tests can provide their own.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use sqf_ir::Value;
use tracing::debug;

/// Receivers of a broadcast.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BroadcastTarget {
    Everyone,
    Server,
    Client(i64),
}

impl BroadcastTarget {
    /// Client id used by scripts to address the server.
    pub const SERVER_ID: i64 = -1;

    /// Largest magnitude a double holds without skipping integers.
    const MAX_EXACT_ID: f64 = 9_007_199_254_740_992.0;

    /// Target addressed by a numeric id as written in a script. Ids that
    /// are not whole numbers address nobody.
    pub fn from_number(id: f64) -> Option<Self> {
        if !id.is_finite() || id.fract() != 0.0 || id.abs() > Self::MAX_EXACT_ID {
            return None;
        }
        let id = id as i64;
        Some(if id == Self::SERVER_ID {
            BroadcastTarget::Server
        } else {
            BroadcastTarget::Client(id)
        })
    }
}

impl fmt::Display for BroadcastTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BroadcastTarget::Everyone => f.write_str("everyone"),
            BroadcastTarget::Server => f.write_str("server"),
            BroadcastTarget::Client(id) => write!(f, "client {id}"),
        }
    }
}

/// The network a client is part of.
pub trait Simulation {
    /// Send the current value of a public variable. Fire-and-forget.
    fn broadcast(&self, name: &str, value: &Value, target: BroadcastTarget);
}

/// Shared handle to a simulation; single-threaded like the evaluator.
pub type SharedSimulation = Rc<dyn Simulation>;

/// The machine a script runs on.
pub trait Client {
    fn is_server(&self) -> bool;
    fn is_client(&self) -> bool;
    fn is_dedicated(&self) -> bool;
    fn simulation(&self) -> SharedSimulation;
}

/// A client with fixed roles.
pub struct LocalClient {
    is_server: bool,
    is_client: bool,
    is_dedicated: bool,
    simulation: SharedSimulation,
}

impl LocalClient {
    /// A player machine: client, not server.
    pub fn new(simulation: SharedSimulation) -> Self {
        LocalClient {
            is_server: false,
            is_client: true,
            is_dedicated: false,
            simulation,
        }
    }

    /// A hosted server that is also a player.
    pub fn server(simulation: SharedSimulation) -> Self {
        LocalClient {
            is_server: true,
            ..LocalClient::new(simulation)
        }
    }

    /// A dedicated server with no player attached.
    pub fn dedicated(simulation: SharedSimulation) -> Self {
        LocalClient {
            is_server: true,
            is_client: false,
            is_dedicated: true,
            simulation,
        }
    }
}

impl Client for LocalClient {
    fn is_server(&self) -> bool {
        self.is_server
    }

    fn is_client(&self) -> bool {
        self.is_client
    }

    fn is_dedicated(&self) -> bool {
        self.is_dedicated
    }

    fn simulation(&self) -> SharedSimulation {
        Rc::clone(&self.simulation)
    }
}

/// One recorded call to [`Simulation::broadcast`].
#[derive(Clone, Debug, PartialEq)]
pub struct Broadcast {
    pub name: String,
    pub value: Value,
    pub target: BroadcastTarget,
}

/// Simulation that records broadcasts instead of sending them.
///
/// Used by hosts that inspect a script's network traffic, and by tests.
#[derive(Default)]
pub struct RecordingSimulation {
    broadcasts: RefCell<Vec<Broadcast>>,
}

impl RecordingSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Broadcasts recorded so far, oldest first.
    pub fn broadcasts(&self) -> Vec<Broadcast> {
        self.broadcasts.borrow().clone()
    }

    pub fn clear(&self) {
        self.broadcasts.borrow_mut().clear();
    }
}

impl Simulation for RecordingSimulation {
    fn broadcast(&self, name: &str, value: &Value, target: BroadcastTarget) {
        debug!(name, %value, %target, "broadcast");
        self.broadcasts.borrow_mut().push(Broadcast {
            name: name.to_owned(),
            value: value.clone(),
            target,
        });
    }
}
