mod git_contract;
