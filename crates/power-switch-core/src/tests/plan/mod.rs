mod plan_set;
