use std::sync::Once;


pub mod action;


static SETUP_ONCE: Once = Once::new();

/*
* wire the action creators, call before any transaction parse
*/
pub fn setup() {
    SETUP_ONCE.call_once(|| {
        protocol::setup::action_register(protocol::action::try_create);
        protocol::setup::action_register(action::try_create);
    });
}
