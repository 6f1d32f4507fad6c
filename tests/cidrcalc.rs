use assert_cmd::Command;

/*-------------------------------------------------------------------------------------------------
  cidrcalc Binary Tests
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  No Arguments - No Target CIDR Source
--------------------------------------------------------------------------------------*/

#[test]
fn command_no_args() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .assert()
        .failure()
        .code(1);
}

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Output Formats
--------------------------------------------------------------------------------------*/

/*-----------------------------------------------------------------------------
  Output: Plain
-----------------------------------------------------------------------------*/

#[test]
fn command_output_plain() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("192.168.1.0/24")
        .assert()
        .success()
        .stdout(
            "source_cidr : 192.168.1.0/24\n\
             network     : 192.168.1.0\n\
             mask        : 255.255.255.0\n\
             host_num    : 254\n\
             min_address : 192.168.1.1\n\
             max_address : 192.168.1.254\n\
             broadcast   : 192.168.1.255\n\
             \n",
        );
}

/*-----------------------------------------------------------------------------
  Output: CSV
-----------------------------------------------------------------------------*/

#[test]
fn command_output_csv() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("--output")
        .arg("csv")
        .arg("192.168.1.0/24")
        .arg("10.0.0.0/31")
        .assert()
        .success()
        .stdout(
            "source_cidr,network,mask,host_num,min_address,max_address,broadcast\n\
             192.168.1.0/24,192.168.1.0,255.255.255.0,254,192.168.1.1,192.168.1.254,192.168.1.255\n\
             10.0.0.0/31,10.0.0.0,255.255.255.254,2,10.0.0.0,10.0.0.1,10.0.0.1\n",
        );
}

/*-----------------------------------------------------------------------------
  Output: TSV
-----------------------------------------------------------------------------*/

#[test]
fn command_output_tsv() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("--output")
        .arg("tsv")
        .arg("192.168.1.0/32")
        .assert()
        .success()
        .stdout(
            "source_cidr\tnetwork\tmask\thost_num\tmin_address\tmax_address\tbroadcast\n\
             192.168.1.0/32\t192.168.1.0\t255.255.255.255\t1\t\t\t\n",
        );
}

/*--------------------------------------------------------------------------------------
  Multiple Target CIDRs
--------------------------------------------------------------------------------------*/

#[test]
fn command_multiple_cidrs() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("192.168.1.0/24")
        .arg("10.0.0.0/8")
        .arg("172.16.0.0/12")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Per-Item Failure Tolerance
--------------------------------------------------------------------------------------*/

#[test]
fn command_invalid_cidr_continues() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("--output")
        .arg("csv")
        .arg("not-a-cidr")
        .arg("10.0.0.0/31")
        .assert()
        .success()
        .stdout(
            "source_cidr,network,mask,host_num,min_address,max_address,broadcast\n\
             10.0.0.0/31,10.0.0.0,255.255.255.254,2,10.0.0.0,10.0.0.1,10.0.0.1\n",
        );
}

/*--------------------------------------------------------------------------------------
  CIDR List File
--------------------------------------------------------------------------------------*/

/*-----------------------------------------------------------------------------
  File Source
-----------------------------------------------------------------------------*/

#[test]
fn command_file_source() {
    let path = std::env::temp_dir().join("cidrcalc_command_file_source.txt");
    std::fs::write(&path, "192.168.1.0/24\n10.0.0.0/8\n").unwrap();

    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("--file")
        .arg(&path)
        .arg("--output")
        .arg("csv")
        .assert()
        .success()
        .stdout(
            "source_cidr,network,mask,host_num,min_address,max_address,broadcast\n\
             192.168.1.0/24,192.168.1.0,255.255.255.0,254,192.168.1.1,192.168.1.254,192.168.1.255\n\
             10.0.0.0/8,10.0.0.0,255.0.0.0,16777214,10.0.0.1,10.255.255.254,10.255.255.255\n",
        );

    let _ = std::fs::remove_file(&path);
}

/*-----------------------------------------------------------------------------
  File Missing
-----------------------------------------------------------------------------*/

#[test]
fn command_file_missing() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("--file")
        .arg("./scratch/no_such_cidr_list.txt")
        .assert()
        .failure()
        .code(1);
}

/*-----------------------------------------------------------------------------
  Positional Arguments Take Precedence Over the File
-----------------------------------------------------------------------------*/

#[test]
fn command_args_take_precedence_over_file() {
    Command::cargo_bin("cidrcalc")
        .unwrap()
        .arg("--file")
        .arg("./scratch/no_such_cidr_list.txt")
        .arg("192.168.1.0/30")
        .assert()
        .success();
}
