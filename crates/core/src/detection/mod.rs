/// Classification of output scripts by address prefix and template.
///
/// The range classifier reads the first four bytes of the hash in a pay-to-pubkey-hash shaped
/// script and looks them up in a sorted table of labelled prefix ranges. Scripts without that
/// shape may instead be flagged as bare multisig, depending on policy.
///
/// # Usage
/// ```rust,ignore
/// use detection::{PrefixTable, ScriptClassifier};
///
/// let classifier = ScriptClassifier::new(PrefixTable::builtin(), &ClassifierConfig::standard());
/// let class = classifier.classify(&script);
/// ```
mod builtin;
pub mod classifier;
pub mod prefix;

pub use classifier::{BARE_MULTISIG_LABEL, RangeMatch, ScriptClass, ScriptClassifier};
pub use prefix::{PrefixRange, PrefixTable};
