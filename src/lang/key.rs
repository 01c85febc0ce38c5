use std::collections::HashMap;

thread_local!(
    static WORD_TO_ACTION: HashMap<String, Action> = Action::words()
        .drain(..)
        .map(|(w, a)| (w.to_ascii_lowercase(), a))
        .collect();
);

/// ## The five keypad transitions

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operator),
    Clear,
    DeleteDigit,
    Evaluate,
}

impl Action {
    /// Looks up a typed key. Words are matched case-insensitively;
    /// keypad faces like `÷` and `π` match exactly.
    pub fn from_word(s: &str) -> Option<Action> {
        let s = s.to_ascii_lowercase();
        WORD_TO_ACTION.with(|wta| wta.get(&s).copied())
    }

    fn words() -> Vec<(&'static str, Action)> {
        use Action::*;
        let mut words: Vec<(&'static str, Action)> = vec![
            ("ac", Clear),
            ("c", Clear),
            ("clear", Clear),
            ("del", DeleteDigit),
            ("=", Evaluate),
            ("/", ChooseOperation(Operator::Binary(Binary::Divide))),
            ("x", ChooseOperation(Operator::Binary(Binary::Multiply))),
            ("×", ChooseOperation(Operator::Binary(Binary::Multiply))),
            ("sqrt", ChooseOperation(Operator::Unary(Unary::Sqrt))),
            ("fact", ChooseOperation(Operator::Unary(Unary::Factorial))),
            ("ln", ChooseOperation(Operator::Unary(Unary::Ln))),
            ("pi", ChooseOperation(Operator::Constant(Constant::Pi))),
        ];
        for op in Binary::ALL.iter().map(|b| Operator::Binary(*b)) {
            words.push((op.label(), ChooseOperation(op)));
        }
        for op in Unary::ALL.iter().map(|u| Operator::Unary(*u)) {
            words.push((op.label(), ChooseOperation(op)));
        }
        for op in Constant::ALL.iter().map(|c| Operator::Constant(*c)) {
            words.push((op.label(), ChooseOperation(op)));
        }
        words
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Action::*;
        match self {
            AddDigit(d) => write!(f, "{}", d),
            ChooseOperation(op) => write!(f, "{}", op),
            Clear => write!(f, "AC"),
            DeleteDigit => write!(f, "DEL"),
            Evaluate => write!(f, "="),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Point,
}

impl Digit {
    pub fn from_char(ch: char) -> Option<Digit> {
        use Digit::*;
        Some(match ch {
            '0' => Zero,
            '1' => One,
            '2' => Two,
            '3' => Three,
            '4' => Four,
            '5' => Five,
            '6' => Six,
            '7' => Seven,
            '8' => Eight,
            '9' => Nine,
            '.' => Point,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        use Digit::*;
        match self {
            Zero => '0',
            One => '1',
            Two => '2',
            Three => '3',
            Four => '4',
            Five => '5',
            Six => '6',
            Seven => '7',
            Eight => '8',
            Nine => '9',
            Point => '.',
        }
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Binary(Binary),
    Unary(Unary),
    Constant(Constant),
}

impl Operator {
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Binary(b) => b.label(),
            Operator::Unary(u) => u.label(),
            Operator::Constant(c) => c.label(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Binary {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

impl Binary {
    pub const ALL: [Binary; 6] = [
        Binary::Add,
        Binary::Subtract,
        Binary::Multiply,
        Binary::Divide,
        Binary::Remainder,
        Binary::Power,
    ];

    pub fn label(&self) -> &'static str {
        use Binary::*;
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "÷",
            Remainder => "%",
            Power => "^",
        }
    }
}

impl std::fmt::Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Unary {
    Sqrt,
    Factorial,
    Sin,
    Cos,
    Tan,
    Inv,
    Ln,
    Log,
    Rad,
}

impl Unary {
    pub const ALL: [Unary; 9] = [
        Unary::Sqrt,
        Unary::Factorial,
        Unary::Sin,
        Unary::Cos,
        Unary::Tan,
        Unary::Inv,
        Unary::Ln,
        Unary::Log,
        Unary::Rad,
    ];

    pub fn label(&self) -> &'static str {
        use Unary::*;
        match self {
            Sqrt => "√",
            Factorial => "!",
            Sin => "Sin",
            Cos => "Cos",
            Tan => "Tan",
            Inv => "Inv",
            Ln => "In",
            Log => "log",
            Rad => "Rad",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    pub fn label(&self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}
