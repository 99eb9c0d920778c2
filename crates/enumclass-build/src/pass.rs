use crate::{
    codegen::synthesize,
    gate::{CachedGeneration, GenerationCache, fingerprint},
    model,
};
use enumclass_schema::prelude::*;
use rayon::prelude::*;
use std::{
    collections::{BTreeMap, HashSet},
    sync::atomic::{AtomicBool, Ordering},
};

///
/// PassOutput
///
/// Artifacts keyed by target path plus one diagnostic per failed declaration.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PassOutput {
    pub artifacts: BTreeMap<String, Vec<GeneratedArtifact>>,
    pub diagnostics: Vec<Diagnostic>,
    pub synthesized: usize,
    pub reused: usize,
    pub cancelled: bool,
}

impl PassOutput {
    /// Every artifact across all targets, in target order.
    pub fn iter_artifacts(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.values().flatten()
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && !self.cancelled
    }
}

///
/// Outcome
///

enum Outcome {
    Unmarked,
    Cancelled,
    Failed(Diagnostic),
    Generated {
        target: String,
        model: GenerationModel,
        fingerprint: u128,
        artifacts: Artifacts,
        reused: bool,
    },
}

///
/// GenerationPass
///
/// One run of the pipeline over every declaration a provider reports.
///

pub struct GenerationPass<'a, P: ?Sized> {
    provider: &'a P,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, P> GenerationPass<'a, P>
where
    P: SymbolProvider + Sync + ?Sized,
{
    #[must_use]
    pub const fn new(provider: &'a P) -> Self {
        Self {
            provider,
            cancel: None,
        }
    }

    /// Stop work on any declaration once `flag` is set.
    #[must_use]
    pub const fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Run every declaration in parallel, then merge in declaration order.
    pub fn run(&self, cache: &mut GenerationCache) -> PassOutput {
        let previous: &GenerationCache = cache;
        let outcomes: Vec<Outcome> = self
            .provider
            .declarations()
            .par_iter()
            .map(|decl| self.process(decl, previous))
            .collect();

        let output = merge(outcomes, cache);

        tracing::info!(
            targets = output.artifacts.len(),
            synthesized = output.synthesized,
            reused = output.reused,
            diagnostics = output.diagnostics.len(),
            cancelled = output.cancelled,
            "generation pass finished"
        );

        output
    }

    fn process(&self, decl: &DeclSymbol, cache: &GenerationCache) -> Outcome {
        let declaration = decl.path();
        let fail = |error| Outcome::Failed(Diagnostic::new(declaration.clone(), error));

        if self.cancelled() {
            return Outcome::Cancelled;
        }

        let model = match model::build(self.provider, decl) {
            Ok(Some(model)) => model,
            Ok(None) => return Outcome::Unmarked,
            Err(err) => return fail(err),
        };

        if self.cancelled() {
            return Outcome::Cancelled;
        }

        let target = model.target_path();
        let fingerprint = fingerprint(&model);

        if let Some(artifacts) = cache
            .get(&target)
            .and_then(|entry| entry.reuse(&model, fingerprint))
        {
            tracing::debug!(%target, "model unchanged, reusing artifacts");

            return Outcome::Generated {
                target,
                model,
                fingerprint,
                artifacts: artifacts.clone(),
                reused: true,
            };
        }

        if self.cancelled() {
            return Outcome::Cancelled;
        }

        match synthesize(&model) {
            Ok(artifacts) => {
                tracing::debug!(%target, "synthesized artifacts");

                Outcome::Generated {
                    target,
                    model,
                    fingerprint,
                    artifacts,
                    reused: false,
                }
            }
            Err(err) => fail(err),
        }
    }
}

// merge
// sequential, so hint collisions and cache updates are deterministic
fn merge(outcomes: Vec<Outcome>, cache: &mut GenerationCache) -> PassOutput {
    let mut output = PassOutput::default();
    let mut hints: HashSet<String> = HashSet::new();
    let mut live: HashSet<String> = HashSet::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Unmarked => {}
            Outcome::Cancelled => output.cancelled = true,
            Outcome::Failed(diagnostic) => output.diagnostics.push(diagnostic),
            Outcome::Generated {
                target,
                model,
                fingerprint,
                artifacts,
                reused,
            } => {
                // a declaration contributes both artifacts or none
                if let Some(taken) = artifacts.iter().find(|a| hints.contains(&a.hint_name)) {
                    output.diagnostics.push(Diagnostic::new(
                        target,
                        SchemaError::DuplicateArtifactName(taken.hint_name.clone()),
                    ));
                    continue;
                }
                hints.extend(artifacts.iter().map(|a| a.hint_name.clone()));

                if reused {
                    output.reused += 1;
                } else {
                    output.synthesized += 1;
                }

                live.insert(target.clone());
                output
                    .artifacts
                    .insert(target.clone(), artifacts.clone().into_vec());
                cache.insert(
                    target,
                    CachedGeneration {
                        model,
                        fingerprint,
                        artifacts,
                    },
                );
            }
        }
    }

    if !output.cancelled {
        cache.retain(|target| live.contains(target));
    }

    output
}

///
/// TESTS
///
