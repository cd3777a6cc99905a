//! Name → command lookup.

use crate::clock::Clock;
use crate::desk::commands::{CheckIn, CheckOut, Command, Exit, Floors, List, Prices, Save, View};
use crate::desk::DeskError;
use crate::index::OrderedMap;

/// Builds a fresh command instance
pub type CommandFactory<C> = fn() -> Box<dyn Command<C>>;

fn make<C: Clock, T: Command<C> + Default + 'static>() -> Box<dyn Command<C>> {
    Box::new(T::default())
}

/// Commands known to a session, in registration order.
pub struct CommandRegistry<C> {
    factories: OrderedMap<&'static str, CommandFactory<C>>,
}

impl<C: Clock> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CommandRegistry<C> {
    pub fn new() -> Self {
        Self {
            factories: OrderedMap::new(),
        }
    }

    /// Every front-desk command
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("checkin", make::<C, CheckIn>);
        registry.register("checkout", make::<C, CheckOut>);
        registry.register("view", make::<C, View>);
        registry.register("list", make::<C, List>);
        registry.register("prices", make::<C, Prices>);
        registry.register("floors", make::<C, Floors>);
        registry.register("save", make::<C, Save>);
        registry.register("exit", make::<C, Exit>);
        registry
    }

    /// Register `factory` under `name`, replacing any earlier one in place
    pub fn register(&mut self, name: &'static str, factory: CommandFactory<C>) {
        self.factories.put(name, factory);
    }

    /// Instantiate the command called `name`
    pub fn create(&self, name: &str) -> Result<Box<dyn Command<C>>, DeskError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| DeskError::UnknownCommand(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.keys()
    }
}
