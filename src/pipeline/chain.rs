use super::error::GeneratorError;
use super::processor::Processor;
use crate::model::Lambda;
use tracing::{debug, info};

/// Entity counts observed for one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageStats {
    pub stage: &'static str,
    /// Entities handed to the stage (including its own seeds)
    pub input: usize,
    /// Entities the stage produced
    pub output: usize,
    /// Entities passed through because no rule applied
    pub unmatched: usize,
}

/// Per-stage statistics for one chain run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainReport {
    pub stages: Vec<StageStats>,
}

impl ChainReport {
    pub fn stage(&self, name: &str) -> Option<&StageStats> {
        self.stages.iter().find(|s| s.stage == name)
    }

    /// Unmatched pass-throughs across all stages.
    pub fn total_unmatched(&self) -> usize {
        self.stages.iter().map(|s| s.unmatched).sum()
    }
}

/// Result of [`ProcessorChain::invoke`].
#[derive(Debug, Clone)]
pub struct ChainOutput {
    pub lambdas: Vec<Lambda>,
    pub report: ChainReport,
}

/// Ordered sequence of stages.
///
/// Stages run in registration order. Each stage's output is the next stage's
/// input, so registration order is part of the contract: a stage assumes the
/// fields of every earlier stage are final and those of later stages are unset.
#[derive(Default)]
pub struct ProcessorChain {
    processors: Vec<Box<dyn Processor>>,
    strict: bool,
}

impl ProcessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on unmatched entities instead of passing them through.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Append a stage to the end of the chain.
    pub fn add_processor(&mut self, processor: Box<dyn Processor>) {
        self.processors.push(processor);
    }

    /// Builder form of [`ProcessorChain::add_processor`].
    pub fn with(mut self, processor: impl Processor + 'static) -> Self {
        self.add_processor(Box::new(processor));
        self
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run every stage once, in order.
    pub fn invoke(&self) -> Result<ChainOutput, GeneratorError> {
        self.invoke_traced(|_, _| {})
    }

    /// Run every stage, handing the list produced by each stage to `observer`.
    pub fn invoke_traced<F>(&self, mut observer: F) -> Result<ChainOutput, GeneratorError>
    where
        F: FnMut(&'static str, &[Lambda]),
    {
        let mut current: Vec<Lambda> = Vec::new();
        let mut report = ChainReport::default();

        for processor in &self.processors {
            let stage = processor.name();
            let owned = processor.owned_fields();
            let mut input = processor.seed();
            input.append(&mut current);

            let mut output = Vec::with_capacity(input.len());
            let mut unmatched = 0;
            for lambda in &input {
                match processor.process(lambda) {
                    Ok(produced) => {
                        for next in produced {
                            if let Some(field) = lambda
                                .differing_fields(&next)
                                .into_iter()
                                .find(|f| !owned.contains(f))
                            {
                                return Err(GeneratorError::FieldOverwrite {
                                    stage,
                                    field,
                                    lambda: lambda.to_string(),
                                });
                            }
                            output.push(next);
                        }
                    }
                    Err(err) => {
                        if self.strict {
                            return Err(GeneratorError::Unmatched {
                                stage,
                                lambda: lambda.to_string(),
                                reason: err.reason,
                            });
                        }
                        debug!(stage, lambda = %lambda, reason = %err, "No rule matched, passing through");
                        unmatched += 1;
                        output.push(lambda.clone());
                    }
                }
            }

            info!(
                stage,
                input = input.len(),
                output = output.len(),
                unmatched,
                "Stage complete"
            );
            report.stages.push(StageStats {
                stage,
                input: input.len(),
                output: output.len(),
                unmatched,
            });
            observer(stage, &output);
            current = output;
        }

        Ok(ChainOutput {
            lambdas: current,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LambdaField, LambdaType};
    use crate::pipeline::error::Unmatched;

    struct Seed;

    impl Processor for Seed {
        fn name(&self) -> &'static str {
            "Seed"
        }
        fn owned_fields(&self) -> &'static [LambdaField] {
            &[LambdaField::Kind]
        }
        fn seed(&self) -> Vec<Lambda> {
            vec![
                Lambda::new(LambdaType::Consumer),
                Lambda::new(LambdaType::Runnable),
            ]
        }
        fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
            Ok(vec![lambda.clone()])
        }
    }

    /// Doubles consumers, cannot handle anything else.
    struct ConsumerOnly;

    impl Processor for ConsumerOnly {
        fn name(&self) -> &'static str {
            "ConsumerOnly"
        }
        fn owned_fields(&self) -> &'static [LambdaField] {
            &[LambdaField::Arity]
        }
        fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
            if lambda.kind() != LambdaType::Consumer {
                return Err(Unmatched::new("not a consumer"));
            }
            Ok(vec![
                lambda.clone().with_arity(1),
                lambda.clone().with_arity(2),
            ])
        }
    }

    /// Writes a field it does not own.
    struct Rogue;

    impl Processor for Rogue {
        fn name(&self) -> &'static str {
            "Rogue"
        }
        fn owned_fields(&self) -> &'static [LambdaField] {
            &[LambdaField::Name]
        }
        fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
            Ok(vec![lambda.clone().with_name("X").with_arity(3)])
        }
    }

    #[test]
    fn test_stages_run_in_registration_order() {
        let chain = ProcessorChain::new().with(Seed).with(ConsumerOnly);
        assert_eq!(chain.stage_names(), vec!["Seed", "ConsumerOnly"]);

        let mut seen = Vec::new();
        let out = chain
            .invoke_traced(|stage, lambdas| seen.push((stage, lambdas.len())))
            .unwrap();
        assert_eq!(seen, vec![("Seed", 2), ("ConsumerOnly", 3)]);
        assert_eq!(out.lambdas.len(), 3);
    }

    #[test]
    fn test_unmatched_passes_through_and_is_counted() {
        let out = ProcessorChain::new()
            .with(Seed)
            .with(ConsumerOnly)
            .invoke()
            .unwrap();
        assert!(out
            .lambdas
            .iter()
            .any(|l| l.kind() == LambdaType::Runnable && l.arity() == 0));
        let stats = out.report.stage("ConsumerOnly").unwrap();
        assert_eq!(stats.input, 2);
        assert_eq!(stats.output, 3);
        assert_eq!(stats.unmatched, 1);
        assert_eq!(out.report.total_unmatched(), 1);
    }

    #[test]
    fn test_strict_chain_rejects_unmatched() {
        let err = ProcessorChain::new()
            .strict(true)
            .with(Seed)
            .with(ConsumerOnly)
            .invoke()
            .unwrap_err();
        match err {
            GeneratorError::Unmatched { stage, reason, .. } => {
                assert_eq!(stage, "ConsumerOnly");
                assert_eq!(reason, "not a consumer");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_field_overwrite_is_rejected() {
        let err = ProcessorChain::new()
            .with(Seed)
            .with(Rogue)
            .invoke()
            .unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::FieldOverwrite {
                stage: "Rogue",
                field: LambdaField::Arity,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_chain_yields_nothing() {
        let chain = ProcessorChain::new();
        assert!(chain.is_empty());
        let out = chain.invoke().unwrap();
        assert!(out.lambdas.is_empty());
        assert!(out.report.stages.is_empty());
    }
}
