//! Toy Proof Model
//!
//! A fixed-shape representation of worked derivations: statements, axioms,
//! inference steps, proofs, and theorems. This is an illustrative data
//! structure, not a logic engine; `Proof::verify` checks that the dependency
//! chain of a proof is well-formed (every premise is an axiom or an earlier
//! conclusion), never that the justifications are mathematically sound.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The flavor of an atomic assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    Logical,
    Equality,
    Inequality,
}

/// An atomic logical assertion. Immutable once created; two statements are
/// the same statement exactly when kind and description match. The truth
/// value is an annotation, never part of identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub description: String,
    pub truth_value: Option<bool>,
}

impl Statement {
    fn new(kind: StatementKind, description: impl Into<String>) -> Self {
        Statement {
            kind,
            description: description.into(),
            truth_value: None,
        }
    }

    pub fn logical(description: impl Into<String>) -> Self {
        Statement::new(StatementKind::Logical, description)
    }

    pub fn equality(description: impl Into<String>) -> Self {
        Statement::new(StatementKind::Equality, description)
    }

    pub fn inequality(description: impl Into<String>) -> Self {
        Statement::new(StatementKind::Inequality, description)
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.description == other.description
    }
}

impl Eq for Statement {}

impl Hash for Statement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.description.hash(state);
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A statement taken as given, requiring no further justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axiom {
    pub statement: Statement,
}

impl Axiom {
    /// Axioms are given as true.
    pub fn new(description: impl Into<String>) -> Self {
        let mut statement = Statement::logical(description);
        statement.truth_value = Some(true);
        Axiom { statement }
    }
}

/// A single inference: premises, one conclusion, a named rule, and prose
/// justification. Premises are held by value; whether they are actually
/// established is the owning proof's business, not the step's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub premises: Vec<Statement>,
    pub conclusion: Statement,
    pub rule: String,
    pub justification: String,
}

impl ProofStep {
    pub fn new(
        premises: Vec<Statement>,
        conclusion: Statement,
        rule: impl Into<String>,
        justification: impl Into<String>,
    ) -> Self {
        ProofStep {
            premises,
            conclusion,
            rule: rule.into(),
            justification: justification.into(),
        }
    }
}

/// An append-only sequence of axioms and inference steps aimed at a goal
/// statement.
///
/// Nothing is validated at append time: construction order is the caller's
/// responsibility and `verify` reports a malformed chain as false instead of
/// failing during building. (Validating eagerly in `add_step` would be the
/// stricter alternative; the lazy model keeps partially-built proofs
/// representable.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    goal: Statement,
    axioms: Vec<Axiom>,
    steps: Vec<ProofStep>,
}

impl Proof {
    pub fn new(goal: Statement) -> Self {
        Proof {
            goal,
            axioms: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// The statement this proof is meant to establish.
    pub fn goal(&self) -> &Statement {
        &self.goal
    }

    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn add_axiom(&mut self, axiom: Axiom) {
        self.axioms.push(axiom);
    }

    pub fn add_step(&mut self, step: ProofStep) {
        self.steps.push(step);
    }

    /// Structural consistency check.
    ///
    /// Walks the steps in order, seeding the resolved set with the axioms;
    /// every premise of a step must already be resolved (an axiom or a
    /// strictly earlier conclusion), and each conclusion is then added.
    /// Completeness requires at least one step and that the final conclusion
    /// is the goal. Steps are an ordered sequence, so well-formedness here
    /// implies the dependency graph is acyclic.
    pub fn verify(&self) -> bool {
        if self.steps.is_empty() {
            return false;
        }

        let mut resolved: HashSet<&Statement> =
            self.axioms.iter().map(|axiom| &axiom.statement).collect();

        for step in &self.steps {
            if !step.premises.iter().all(|premise| resolved.contains(premise)) {
                return false;
            }
            resolved.insert(&step.conclusion);
        }

        self.steps
            .last()
            .map(|step| step.conclusion == self.goal)
            .unwrap_or(false)
    }
}

/// A statement with a proven flag and an optional owned proof.
///
/// Lifecycle: created unproven; a proof is built separately and attached,
/// and the flag is set from the proof's verification. Once proven, the proof
/// is not meant to be mutated further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theorem {
    pub statement: Statement,
    pub proven: bool,
    pub proof: Option<Proof>,
}

impl Theorem {
    pub fn new(description: impl Into<String>) -> Self {
        Theorem {
            statement: Statement::logical(description),
            proven: false,
            proof: None,
        }
    }

    /// Attach a proof and set `proven` from its verification. A proof whose
    /// goal differs from the theorem's statement never proves it.
    pub fn attach_proof(&mut self, proof: Proof) {
        self.proven = proof.verify() && *proof.goal() == self.statement;
        if self.proven {
            self.statement.truth_value = Some(true);
        }
        self.proof = Some(proof);
    }
}

const FTA_DESCRIPTION: &str = "Every integer greater than 1 either is prime itself or is the \
     product of prime numbers, and this product is unique up to the order of \
     the factors.";

/// Build the Fundamental Theorem of Arithmetic as a proven theorem.
///
/// The proof is a fixed nine-step derivation: existence of a prime
/// factorization by well-ordering (steps 1-5), uniqueness by contradiction
/// through Euclid's lemma (steps 6-8), and the conjunction of both halves
/// (step 9).
pub fn fundamental_theorem_of_arithmetic() -> Theorem {
    let mut theorem = Theorem::new(FTA_DESCRIPTION);
    let mut proof = Proof::new(theorem.statement.clone());

    let well_ordering =
        Axiom::new("Every nonempty set of positive integers has a least element");
    let smallest_divisor = Axiom::new(
        "Every integer n > 1 has a divisor d > 1, and the smallest such divisor is prime",
    );
    let euclids_lemma = Axiom::new(
        "If a prime divides a product of integers, it divides one of the factors",
    );

    proof.add_axiom(well_ordering.clone());
    proof.add_axiom(smallest_divisor.clone());
    proof.add_axiom(euclids_lemma.clone());

    let has_prime_divisor = Statement::logical("Every integer n > 1 has a prime divisor");
    let least_counterexample = Statement::logical(
        "If some integer > 1 were not a product of primes, there would be a least such integer m",
    );
    let split_counterexample = Statement::logical(
        "The least counterexample m has a prime divisor p, so m = p * k with 1 <= k < m",
    );
    let counterexample_contradiction = Statement::logical(
        "k is 1 or a product of primes, so m = p * k is a product of primes, contradicting the \
         choice of m",
    );
    let existence = Statement::logical("Every integer greater than 1 is a product of primes");
    let least_ambiguous = Statement::logical(
        "If some integer had two distinct prime factorizations, there would be a least such \
         integer n",
    );
    let shared_prime = Statement::logical(
        "A prime p in one factorization of n divides the other factorization, so p occurs in both",
    );
    let uniqueness = Statement::logical(
        "Cancelling p would give n/p < n with two distinct factorizations, so factorizations \
         are unique up to order",
    );
    let conclusion = Statement::logical(FTA_DESCRIPTION);

    proof.add_step(ProofStep::new(
        vec![smallest_divisor.statement.clone()],
        has_prime_divisor.clone(),
        "specialization",
        "The smallest divisor greater than 1 is itself prime",
    ));
    proof.add_step(ProofStep::new(
        vec![well_ordering.statement.clone()],
        least_counterexample.clone(),
        "well-ordering",
        "Apply well-ordering to the set of integers > 1 with no prime factorization",
    ));
    proof.add_step(ProofStep::new(
        vec![least_counterexample.clone(), has_prime_divisor.clone()],
        split_counterexample.clone(),
        "modus ponens",
        "m > 1, so m has a prime divisor p and splits as p * k",
    ));
    proof.add_step(ProofStep::new(
        vec![split_counterexample.clone()],
        counterexample_contradiction.clone(),
        "minimality",
        "k < m, so k is not a counterexample; prepending p factors m into primes",
    ));
    proof.add_step(ProofStep::new(
        vec![counterexample_contradiction.clone()],
        existence.clone(),
        "reductio ad absurdum",
        "No least counterexample exists, so no counterexample exists",
    ));
    proof.add_step(ProofStep::new(
        vec![well_ordering.statement.clone()],
        least_ambiguous.clone(),
        "well-ordering",
        "Apply well-ordering to the set of integers with two distinct factorizations",
    ));
    proof.add_step(ProofStep::new(
        vec![least_ambiguous.clone(), euclids_lemma.statement.clone()],
        shared_prime.clone(),
        "Euclid's lemma",
        "p divides n, hence divides the other product, hence one of its prime factors",
    ));
    proof.add_step(ProofStep::new(
        vec![shared_prime.clone()],
        uniqueness.clone(),
        "minimality",
        "n/p < n would be a smaller ambiguous integer, contradicting the choice of n",
    ));
    proof.add_step(ProofStep::new(
        vec![existence.clone(), uniqueness.clone()],
        conclusion,
        "conjunction",
        "Existence and uniqueness together are the theorem",
    ));

    theorem.attach_proof(proof);
    theorem
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equality(description: &str) -> Statement {
        Statement::equality(description)
    }

    #[test]
    fn test_statement_identity() {
        let a = Statement::logical("n > 1");
        let b = Statement::logical("n > 1");
        let c = Statement::inequality("n > 1");
        assert_eq!(a, b);
        assert_ne!(a, c); // same text, different kind
    }

    #[test]
    fn test_empty_proof_does_not_verify() {
        let proof = Proof::new(Statement::logical("anything"));
        assert!(!proof.verify());
    }

    #[test]
    fn test_single_step_proof() {
        let goal = equality("2 + 2 = 4");
        let mut proof = Proof::new(goal.clone());
        proof.add_axiom(Axiom::new("Peano arithmetic"));
        proof.add_step(ProofStep::new(
            vec![Statement::logical("Peano arithmetic")],
            goal,
            "computation",
            "Evaluate both sides",
        ));
        assert!(proof.verify());
    }

    #[test]
    fn test_unresolved_premise_fails() {
        let goal = Statement::logical("B");
        let mut proof = Proof::new(goal.clone());
        proof.add_step(ProofStep::new(
            vec![Statement::logical("A")], // never established
            goal,
            "modus ponens",
            "",
        ));
        assert!(!proof.verify());
    }

    #[test]
    fn test_forward_reference_fails() {
        // Step 1 uses step 2's conclusion; ordering makes this illegal.
        let goal = Statement::logical("C");
        let mut proof = Proof::new(goal.clone());
        proof.add_axiom(Axiom::new("A"));
        proof.add_step(ProofStep::new(
            vec![Statement::logical("B")],
            goal,
            "modus ponens",
            "",
        ));
        proof.add_step(ProofStep::new(
            vec![Statement::logical("A")],
            Statement::logical("B"),
            "modus ponens",
            "",
        ));
        assert!(!proof.verify());
    }

    #[test]
    fn test_wrong_goal_fails() {
        let mut proof = Proof::new(Statement::logical("the goal"));
        proof.add_axiom(Axiom::new("A"));
        proof.add_step(ProofStep::new(
            vec![Statement::logical("A")],
            Statement::logical("something else"),
            "modus ponens",
            "",
        ));
        assert!(!proof.verify());
    }

    #[test]
    fn test_theorem_lifecycle() {
        let mut theorem = Theorem::new("A implies A");
        assert!(!theorem.proven);
        assert!(theorem.proof.is_none());

        let mut proof = Proof::new(theorem.statement.clone());
        proof.add_axiom(Axiom::new("A"));
        proof.add_step(ProofStep::new(
            vec![Statement::logical("A")],
            theorem.statement.clone(),
            "identity",
            "A statement follows from itself",
        ));
        theorem.attach_proof(proof);
        assert!(theorem.proven);
        assert_eq!(theorem.statement.truth_value, Some(true));
    }

    #[test]
    fn test_truth_value_is_not_identity() {
        let mut marked = Statement::logical("n > 1");
        marked.truth_value = Some(true);
        assert_eq!(marked, Statement::logical("n > 1"));
    }

    #[test]
    fn test_mismatched_goal_never_proves() {
        let mut theorem = Theorem::new("the actual claim");
        let other = Statement::logical("a different claim");
        let mut proof = Proof::new(other.clone());
        proof.add_axiom(Axiom::new("A"));
        proof.add_step(ProofStep::new(
            vec![Statement::logical("A")],
            other,
            "identity",
            "",
        ));
        theorem.attach_proof(proof);
        assert!(!theorem.proven);
    }

    #[test]
    fn test_fundamental_theorem_of_arithmetic() {
        let theorem = fundamental_theorem_of_arithmetic();
        assert!(theorem.proven);

        let proof = theorem.proof.as_ref().unwrap();
        assert!(proof.verify());
        assert_eq!(proof.axioms().len(), 3);
        assert_eq!(proof.steps().len(), 9);
    }

    #[test]
    fn test_removing_any_step_breaks_the_proof() {
        let theorem = fundamental_theorem_of_arithmetic();
        let proof = theorem.proof.unwrap();

        for removed in 0..proof.steps().len() {
            let mut pruned = Proof::new(proof.goal().clone());
            for axiom in proof.axioms() {
                pruned.add_axiom(axiom.clone());
            }
            for (i, step) in proof.steps().iter().enumerate() {
                if i != removed {
                    pruned.add_step(step.clone());
                }
            }
            assert!(!pruned.verify(), "proof survived removal of step {removed}");
        }
    }

    #[test]
    fn test_proof_round_trips_through_json() {
        let theorem = fundamental_theorem_of_arithmetic();
        let json = serde_json::to_string(&theorem).unwrap();
        let back: Theorem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theorem);
        assert!(back.proof.unwrap().verify());
    }
}
