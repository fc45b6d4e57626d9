pub mod cutout_pro;
