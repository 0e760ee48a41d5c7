#![allow(dead_code)]

// 実機クレートはESPツールチェーンでしかビルドできないため、ハードウェアに
// 依存しない純粋モジュールだけをここへ取り込み、ホスト上でテストする。

#[path = "../../src/codec/mod.rs"]
pub mod codec;

#[path = "../../src/config_validation.rs"]
pub mod config_validation;

pub mod hardware {
    pub mod camera {
        #[path = "../../../../src/hardware/camera/boards.rs"]
        pub mod boards;
        #[path = "../../../../src/hardware/camera/config.rs"]
        pub mod config;
        #[path = "../../../../src/hardware/camera/controller.rs"]
        pub mod controller;
        #[path = "../../../../src/hardware/camera/driver.rs"]
        pub mod driver;
    }
    #[path = "../../../src/hardware/pins.rs"]
    pub mod pins;
}

pub mod storage {
    #[path = "../../../src/storage/counter.rs"]
    pub mod counter;
    #[path = "../../../src/storage/medium.rs"]
    pub mod medium;
    #[path = "../../../src/storage/persister.rs"]
    pub mod persister;
}
