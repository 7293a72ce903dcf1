/// The two problem tables on a TPLC device page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemCategory {
    Device,
    Patient,
}

impl ProblemCategory {
    /// Query key that tags a MAUDE link as belonging to this category.
    pub fn marker(self) -> &'static str {
        match self {
            ProblemCategory::Device => "productproblem",
            ProblemCategory::Patient => "patientproblem",
        }
    }
}
