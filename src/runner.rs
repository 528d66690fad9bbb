use crate::{LifeEngine, SeedPattern};
use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Requests the host can send to a running simulation task. Delivery is
/// serialized over one channel, so engine access never needs locking.
#[derive(Debug)]
pub enum Command {
    Start,
    Pause,
    /// Manual single step, honored even while paused.
    Step,
    Clear,
    SetSpeed(f64),
    LoadPattern(SeedPattern),
    LoadSoup {
        density: f64,
        seed: Option<u64>,
    },
    Toggle {
        x: usize,
        y: usize,
    },
    Snapshot(oneshot::Sender<Vec<(usize, usize)>>),
    Shutdown,
}

/// Owns the timing loop the core consumes: while the engine is running, a
/// step fires every tick interval; commands arriving in between are applied
/// immediately.
///
/// A command that lands while a tick is pending cancels that tick's timer,
/// so `pause` is guaranteed to stop an already-scheduled-but-not-yet-fired
/// step.
pub struct Simulation {
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<LifeEngine>,
}

impl Simulation {
    /// Moves the engine into a background task and returns its handle.
    /// Must be called from within a tokio runtime.
    pub fn spawn(engine: LifeEngine) -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(drive(engine, receiver));
        Self { commands, task }
    }

    pub fn start(&self) -> Result<()> {
        self.send(Command::Start)
    }

    pub fn pause(&self) -> Result<()> {
        self.send(Command::Pause)
    }

    pub fn step(&self) -> Result<()> {
        self.send(Command::Step)
    }

    pub fn clear(&self) -> Result<()> {
        self.send(Command::Clear)
    }

    pub fn set_speed(&self, value: f64) -> Result<()> {
        self.send(Command::SetSpeed(value))
    }

    pub fn load_pattern(&self, pattern: SeedPattern) -> Result<()> {
        self.send(Command::LoadPattern(pattern))
    }

    pub fn load_soup(&self, density: f64, seed: Option<u64>) -> Result<()> {
        self.send(Command::LoadSoup { density, seed })
    }

    pub fn toggle(&self, x: usize, y: usize) -> Result<()> {
        self.send(Command::Toggle { x, y })
    }

    /// Coordinates of every alive cell, observed between steps.
    pub async fn snapshot(&self) -> Result<Vec<(usize, usize)>> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Snapshot(reply))?;
        response
            .await
            .map_err(|_| anyhow!("simulation task dropped the snapshot request"))
    }

    /// Stops the task and hands the engine back.
    pub async fn shutdown(self) -> Result<LifeEngine> {
        self.send(Command::Shutdown)?;
        self.task
            .await
            .map_err(|e| anyhow!("simulation task panicked: {e}"))
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| anyhow!("simulation task has shut down"))
    }
}

async fn drive(
    mut engine: LifeEngine,
    mut commands: mpsc::UnboundedReceiver<Command>,
) -> LifeEngine {
    loop {
        let command = if engine.is_running() {
            tokio::select! {
                command = commands.recv() => command,
                _ = tokio::time::sleep(engine.tick_interval()) => {
                    engine.step();
                    continue;
                }
            }
        } else {
            commands.recv().await
        };

        // channel closed: all handles are gone, stop ticking
        let Some(command) = command else { break };
        match command {
            Command::Start => engine.start(),
            Command::Pause => engine.pause(),
            Command::Step => engine.step(),
            Command::Clear => engine.clear(),
            Command::SetSpeed(value) => engine.set_speed(value),
            Command::LoadPattern(pattern) => engine.load_pattern(pattern),
            Command::LoadSoup { density, seed } => engine.load_soup(density, seed),
            Command::Toggle { x, y } => engine.toggle_cell(x, y),
            Command::Snapshot(reply) => {
                let _ = reply.send(engine.alive_cells());
            }
            Command::Shutdown => break,
        }
    }
    engine
}
