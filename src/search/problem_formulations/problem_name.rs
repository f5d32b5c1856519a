use serde::{Deserialize, Serialize};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProblemName {
    #[clap(help = "Reach a single goal cell.")]
    Position,
    #[clap(help = "Visit all four corners of the maze.")]
    Corners,
    #[clap(help = "Eat every food pellet.")]
    Food,
    #[clap(help = "Eat every food pellet, eating a capsule is free.")]
    Capsule,
    #[clap(
        name = "capsule-avoid",
        help = "Eat every food pellet, eating a capsule costs extra."
    )]
    CapsuleAvoid,
    #[clap(name = "any-food", help = "Reach the nearest food pellet.")]
    AnyFood,
}
