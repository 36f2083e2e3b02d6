//! One customization unit per EFA network

mod avv_augsburg;
mod bayern;
mod bsvag;
mod ding;
mod gvh;
mod kvv;
mod linz;
mod mvv;
mod nvbw;
mod stv;
mod sydney;
mod vgn;
mod vmv;
mod vms;
mod vor;
mod vrr;
mod vvo;
mod vvs;
mod vvt;

pub use avv_augsburg::AvvAugsburg;
pub use bayern::Bayern;
pub use bsvag::Bsvag;
pub use ding::Ding;
pub use gvh::Gvh;
pub use kvv::Kvv;
pub use linz::Linz;
pub use mvv::Mvv;
pub use nvbw::Nvbw;
pub use stv::Stv;
pub use sydney::Sydney;
pub use vgn::Vgn;
pub use vmv::Vmv;
pub use vms::Vms;
pub use vor::Vor;
pub use vrr::Vrr;
pub use vvo::Vvo;
pub use vvs::Vvs;
pub use vvt::Vvt;
