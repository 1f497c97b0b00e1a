use crate::*;

/// Two agents repeatedly playing one stage game.
///
/// The model owns its agents and its matrix for the duration of a run.
/// Every episode is a fixed sequence with no branching:
///
/// 1. both agents sample an action
/// 2. the matrix resolves the joint action into a payoff pair
/// 3. each agent's stimulus is computed against its current aspiration,
///    normalized by the supremum at that aspiration
/// 4. each agent reinforces the action it took
/// 5. each agent moves its aspiration toward the payoff it received
/// 6. the episode is recorded
pub struct BushMosteller {
    agents: [Agent; N],
    matrix: PayoffMatrix,
}

impl BushMosteller {
    pub fn new(agents: [Agent; N], matrix: PayoffMatrix) -> Self {
        Self { agents, matrix }
    }
    pub fn agents(&self) -> &[Agent; N] {
        &self.agents
    }
    pub fn matrix(&self) -> &PayoffMatrix {
        &self.matrix
    }

    /// Play a single round and update both agents.
    pub fn episode(&mut self) -> Result<Episode> {
        let actions = self.agents.each_mut().map(|agent| agent.act());
        let (u0, u1) = self.matrix.payoff((actions[0], actions[1]));
        let payoffs = [u0, u1];
        let mut stimuli = [0.; N];
        for ((stimulus, agent), payoff) in stimuli.iter_mut().zip(&self.agents).zip(payoffs) {
            let sup = self.matrix.supremum(agent.aspiration());
            *stimulus = agent.stimulus(payoff, sup)?;
        }
        let mut strategies = [Strategy::default(); N];
        let mut aspirations = [0.; N];
        for (i, agent) in self.agents.iter_mut().enumerate() {
            strategies[i] = agent.learn(stimuli[i], actions[i]);
            aspirations[i] = agent.update_aspiration(payoffs[i]);
        }
        Ok(Episode {
            actions,
            strategies,
            stimuli,
            aspirations,
        })
    }

    /// Play exactly `episodes` rounds and return the full record.
    pub fn run(mut self, episodes: usize) -> Result<Trajectory> {
        if episodes == 0 {
            return Err(Error::config("nb_episodes", episodes, "must be positive"));
        }
        let mut trajectory = Trajectory::with_capacity(episodes);
        for _ in 0..episodes {
            let episode = self.episode()?;
            log::trace!("{:?}", episode);
            trajectory.push(episode);
        }
        Ok(trajectory)
    }
}
