//! One customization unit per HAFAS network

mod avv_aachen;
mod db;
mod invg;
mod luxembourg;
mod nvv;
mod oebb;
mod rmv;
mod sbb;
mod sh;
mod svv;
mod vbb;
mod vbn;
mod vgs;
mod vmt;
mod zvv;

pub use avv_aachen::AvvAachen;
pub use db::Db;
pub use invg::Invg;
pub use luxembourg::Luxembourg;
pub use nvv::Nvv;
pub use oebb::Oebb;
pub use rmv::Rmv;
pub use sbb::Sbb;
pub use sh::Sh;
pub use svv::Svv;
pub use vbb::Vbb;
pub use vbn::Vbn;
pub use vgs::Vgs;
pub use vmt::Vmt;
pub use zvv::Zvv;
