use paintshop_core::StateMachine;

/// Execute a command deterministically (no IO, no async).
///
/// 1. **Decide**: calls `machine.handle(command)` to get events (pure, no mutation)
/// 2. **Evolve**: applies each event via `machine.apply(event)`
///
/// Either every event is applied or, when `handle` fails, none is: the state is
/// never left half-way through a command.
pub fn execute<M>(machine: &mut M, command: &M::Command) -> Result<Vec<M::Event>, M::Error>
where
    M: StateMachine,
{
    let events = M::handle(machine, command)?;
    for ev in &events {
        M::apply(machine, ev);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Counter {
        value: i64,
        version: u64,
    }

    #[derive(Debug, Clone)]
    enum CounterCommand {
        Add(i64),
        Reset,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum CounterEvent {
        Added(i64),
    }

    impl StateMachine for Counter {
        type Command = CounterCommand;
        type Event = CounterEvent;
        type Error = String;

        fn apply(&mut self, event: &Self::Event) {
            match event {
                CounterEvent::Added(n) => self.value += n,
            }
            self.version += 1;
        }

        fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
            match command {
                CounterCommand::Add(0) => Err("zero".to_string()),
                CounterCommand::Add(n) => Ok(vec![CounterEvent::Added(*n)]),
                CounterCommand::Reset if self.value == 0 => Ok(vec![]),
                CounterCommand::Reset => Ok(vec![CounterEvent::Added(-self.value)]),
            }
        }

        fn version(&self) -> u64 {
            self.version
        }
    }

    #[test]
    fn execute_applies_emitted_events() {
        let mut c = Counter::default();
        let events = execute(&mut c, &CounterCommand::Add(5)).unwrap();
        assert_eq!(events, vec![CounterEvent::Added(5)]);
        assert_eq!(c.value, 5);
        assert_eq!(c.version(), 1);

        execute(&mut c, &CounterCommand::Reset).unwrap();
        assert_eq!(c.value, 0);
        assert_eq!(c.version(), 2);
    }

    #[test]
    fn execute_leaves_state_untouched_on_error() {
        let mut c = Counter::default();
        assert!(execute(&mut c, &CounterCommand::Add(0)).is_err());
        assert_eq!(c.version(), 0);
    }
}
