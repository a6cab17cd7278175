#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    IdentifierNotFound {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that does not exist.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An infix operator was applied to operand types it does not support.
    UnknownOperator {
        /// The operator that was applied.
        operator: String,
        /// The type tag of the left operand.
        left:     String,
        /// The type tag of the right operand.
        right:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access an array element outside the valid range.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The number of elements in the array.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An array was indexed with something other than an integer.
    IndexNotInteger {
        /// The type tag of the value used as an index.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The index operator was applied to a value that is not an array.
    NotIndexable {
        /// The type tag of the indexed value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array literal mixed elements of different types.
    MixedArray {
        /// The type tag of the first element.
        expected: String,
        /// The type tag of the offending element.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A loop ran past the fixed iteration limit.
    LoopLimitExceeded {
        /// The iteration limit that was exceeded.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reading a line from standard input failed.
    InputFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name, line } => {
                write!(f, "Error on line {line}: identifier not found: {name}.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: unknown function: {name}.")
            },
            Self::UnknownOperator { operator,
                                    left,
                                    right,
                                    line, } => write!(f,
                                                      "Error on line {line}: unknown operator: {left} {operator} {right}."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::IndexOutOfBounds { index, length, line } => write!(f,
                                                                    "Error on line {line}: aukat me reh le, aukat me, array ke bahar mat jaa!! Index {index} is out of bounds for an array of {length} elements."),

            Self::IndexNotInteger { found, line } => write!(f,
                                                            "Error on line {line}: array index must be an INTEGER, found {found}."),

            Self::NotIndexable { found, line } => {
                write!(f, "Error on line {line}: index operator not supported: {found}.")
            },
            Self::MixedArray { expected, found, line } => write!(f,
                                                                "Error on line {line}: arrays must hold one type only: expected {expected}, found {found}."),

            Self::LoopLimitExceeded { limit, line } => write!(f,
                                                              "Error on line {line}: loop ran past {limit} iterations without finishing."),

            Self::InputFailed { line } => {
                write!(f, "Error on line {line}: could not read a line from standard input.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
