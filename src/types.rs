/// Numeric record identifier shared by the messages and categories tables.
/// Example: `10872`
pub type RecordId = i64;
/// Name of a category column decoded from the encoded string.
/// Examples: `related`, `request`, `medical_help`
pub type CategoryName = String;
/// Genre label attached to a message by the upstream collector.
/// Examples: `direct`, `news`, `social`
pub type Genre = String;
/// Normalized token emitted by the text pipeline.
/// Examples: `water`, `urlplaceholder`, `run`
pub type Token = String;
/// Sentence text produced by the sentence splitter.
/// Example: `Please send drinking water to the camp.`
pub type Sentence = String;
