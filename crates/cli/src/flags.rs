use clap::ValueEnum;
use seimei_gokaku::LuckFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum LuckFlag {
    All,
    Good,
    Excellent,
}

impl LuckFlag {
    pub(crate) const fn as_domain(self) -> LuckFilter {
        match self {
            LuckFlag::All => LuckFilter::All,
            LuckFlag::Good => LuckFilter::Good,
            LuckFlag::Excellent => LuckFilter::Excellent,
        }
    }
}
