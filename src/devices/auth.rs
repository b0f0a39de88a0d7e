//! Single-user login session.

use super::{fixed_table, Device};
use crate::builder::simple_transition;
use crate::machine::{StateMachine, TransitionError};
use crate::{operation_enum, state_enum};

pub const LOGIN_SUCCESSFUL: &str = "Login successful";
pub const LOGOUT_SUCCESSFUL: &str = "Logout successful";

state_enum! {
    pub enum AuthState {
        LoggedOut => "Logged Out",
        LoggedIn => "Logged In",
    }
}

operation_enum! {
    pub enum AuthOperation {
        Login => "login",
        Logout => "logout",
    }
}

/// Login/logout toggle for one user. No credentials are involved; see
/// [`crate::banking::BankingSystem`] for the multi-user session set.
#[derive(Clone, Debug)]
pub struct UserAuthentication {
    machine: StateMachine<AuthState, AuthOperation>,
}

impl UserAuthentication {
    pub fn new() -> Self {
        Self::in_state(AuthState::LoggedOut)
    }

    pub fn login(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(AuthOperation::Login)
    }

    pub fn logout(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(AuthOperation::Logout)
    }

    pub fn is_logged_in(&self) -> bool {
        self.state() == AuthState::LoggedIn
    }
}

impl Default for UserAuthentication {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for UserAuthentication {
    type State = AuthState;
    type Operation = AuthOperation;

    fn in_state(state: AuthState) -> Self {
        let table = fixed_table(
            AuthState::LoggedOut,
            vec![
                simple_transition(
                    AuthOperation::Login,
                    AuthState::LoggedOut,
                    AuthState::LoggedIn,
                    LOGIN_SUCCESSFUL,
                ),
                simple_transition(
                    AuthOperation::Logout,
                    AuthState::LoggedIn,
                    AuthState::LoggedOut,
                    LOGOUT_SUCCESSFUL,
                ),
            ],
        );
        Self {
            machine: table.with_current(state),
        }
    }

    fn machine(&self) -> &StateMachine<AuthState, AuthOperation> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<AuthState, AuthOperation> {
        &mut self.machine
    }
}
